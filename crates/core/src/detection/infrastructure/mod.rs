pub mod vision_api_detector;
mod vision_wire;
