pub const VISION_API_ENDPOINT: &str = "https://vision.googleapis.com";
pub const ANNOTATE_PATH: &str = "/v1/images:annotate";
pub const FACE_DETECTION_FEATURE: &str = "FACE_DETECTION";

pub const DEFAULT_MAX_RESULTS: u32 = 4;

/// Pure green, drawn over detected faces.
pub const OUTLINE_COLOR: [u8; 3] = [0, 255, 0];
pub const DEFAULT_OUTLINE_THICKNESS: u32 = 1;
pub const MAX_OUTLINE_THICKNESS: u32 = 64;

pub const ENV_API_KEY: &str = "VISION_API_KEY";
pub const ENV_ACCESS_TOKEN: &str = "VISION_ACCESS_TOKEN";
pub const ENV_ENDPOINT: &str = "VISION_API_ENDPOINT";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp"];
