//! JSON shapes of the `images:annotate` REST call.
//!
//! Only the fields this crate reads are modelled. The service encodes
//! proto3 messages, so zero-valued numbers and empty lists may be
//! omitted entirely; every field here has a default.

use base64::engine::general_purpose::STANDARD as Base64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::detection::domain::face_detector::DetectionError;
use crate::shared::constants::FACE_DETECTION_FEATURE;
use crate::shared::face_annotation::FaceAnnotation;
use crate::shared::point::Point;

#[derive(Serialize, Debug)]
pub struct AnnotateRequest {
    requests: Vec<ImageRequest>,
}

#[derive(Serialize, Debug)]
struct ImageRequest {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Serialize, Debug)]
struct ImageContent {
    content: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    max_results: u32,
}

impl AnnotateRequest {
    /// Single-image face detection request with the image inlined as base64.
    pub fn face_detection(image: &[u8], max_results: u32) -> Self {
        Self {
            requests: vec![ImageRequest {
                image: ImageContent {
                    content: Base64.encode(image),
                },
                features: vec![Feature {
                    kind: FACE_DETECTION_FEATURE,
                    max_results,
                }],
            }],
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct BatchResponse {
    responses: Vec<ImageResponse>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
struct ImageResponse {
    face_annotations: Vec<WireFace>,
    error: Option<Status>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
struct WireFace {
    bounding_poly: Option<BoundingPoly>,
    fd_bounding_poly: Option<BoundingPoly>,
    detection_confidence: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct BoundingPoly {
    vertices: Vec<Vertex>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Vertex {
    x: i32,
    y: i32,
}

/// `google.rpc.Code` value the service uses for rejected input.
const INVALID_ARGUMENT: i32 = 3;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Status {
    code: i32,
    message: String,
}

#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: Status,
}

impl From<WireFace> for FaceAnnotation {
    fn from(face: WireFace) -> Self {
        // fdBoundingPoly hugs the skin; boundingPoly also covers the head.
        let vertices = face
            .fd_bounding_poly
            .filter(|p| !p.vertices.is_empty())
            .or(face.bounding_poly)
            .map(|p| p.vertices)
            .unwrap_or_default()
            .into_iter()
            .map(|v| Point::new(v.x, v.y))
            .collect();
        FaceAnnotation {
            vertices,
            confidence: face.detection_confidence,
        }
    }
}

/// Extracts face annotations from a successful response body.
///
/// A per-image `error` with code `INVALID_ARGUMENT` means the service
/// rejected the image; any other code is reported as an upstream failure.
/// A response without face annotations yields an empty list.
pub fn parse_response(body: &str) -> Result<Vec<FaceAnnotation>, DetectionError> {
    let batch: BatchResponse = serde_json::from_str(body).map_err(DetectionError::Decode)?;
    let Some(response) = batch.responses.into_iter().next() else {
        return Ok(Vec::new());
    };
    if let Some(status) = response.error {
        log::debug!("per-image error code {}: {}", status.code, status.message);
        if status.code == INVALID_ARGUMENT {
            return Err(DetectionError::MalformedRequest(status.message));
        }
        return Err(DetectionError::Upstream {
            status: u16::try_from(status.code).unwrap_or(0),
            message: status.message,
        });
    }
    Ok(response
        .face_annotations
        .into_iter()
        .map(FaceAnnotation::from)
        .collect())
}

/// Best-effort message from an error body; falls back to the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}
