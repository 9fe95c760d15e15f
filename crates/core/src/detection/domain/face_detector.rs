use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::face_annotation::FaceAnnotation;

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The service (or the local pre-check) rejected the request,
    /// e.g. because the payload is not an image.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("vision service returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("could not decode vision response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("no credentials configured: set an API key or access token")]
    MissingCredentials,
}

impl DetectionError {
    pub fn is_malformed_request(&self) -> bool {
        matches!(self, DetectionError::MalformedRequest(_))
    }
}

impl From<DetectionError> for std::io::Error {
    fn from(err: DetectionError) -> Self {
        let kind = match &err {
            DetectionError::Read { source, .. } => source.kind(),
            DetectionError::MalformedRequest(_) => std::io::ErrorKind::InvalidData,
            _ => std::io::ErrorKind::Other,
        };
        std::io::Error::new(kind, err)
    }
}

/// Domain interface for face detection on an image file.
///
/// One call, one request: implementations do not retry, batch or cache.
pub trait FaceDetector: Send {
    fn detect(&self, path: &Path, max_results: u32)
        -> Result<Vec<FaceAnnotation>, DetectionError>;
}
