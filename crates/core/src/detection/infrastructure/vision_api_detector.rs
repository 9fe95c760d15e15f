use std::fs;
use std::path::Path;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::detection::domain::face_detector::{DetectionError, FaceDetector};
use crate::shared::constants::ANNOTATE_PATH;
use crate::shared::face_annotation::FaceAnnotation;
use crate::shared::settings::Settings;

use super::vision_wire::{self, AnnotateRequest};

/// How requests to the vision service are authorised.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Sent as the `key` query parameter.
    ApiKey(String),
    /// OAuth2 access token, sent as a bearer `Authorization` header.
    AccessToken(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiKey(_) => write!(f, "ApiKey(..)"),
            Credentials::AccessToken(_) => write!(f, "AccessToken(..)"),
        }
    }
}

/// Face detector backed by the Cloud Vision `images:annotate` endpoint.
///
/// Reads the image file, checks that it is a recognisable image, and
/// submits it base64-encoded in a single blocking request.
pub struct VisionApiDetector {
    client: Client,
    endpoint: String,
    credentials: Credentials,
}

impl VisionApiDetector {
    pub fn new(endpoint: &str, credentials: Credentials) -> Result<Self, DetectionError> {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        let client = Client::builder()
            .user_agent(concat!("face-outline/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DetectionError::Transport {
                url: endpoint.clone(),
                source: e,
            })?;
        Ok(Self {
            client,
            endpoint,
            credentials,
        })
    }

    /// Builds a detector from resolved settings.
    ///
    /// An access token takes precedence over an API key when both are set.
    pub fn from_settings(settings: &Settings) -> Result<Self, DetectionError> {
        let credentials = match (&settings.access_token, &settings.api_key) {
            (Some(token), _) => Credentials::AccessToken(token.clone()),
            (None, Some(key)) => Credentials::ApiKey(key.clone()),
            (None, None) => return Err(DetectionError::MissingCredentials),
        };
        Self::new(&settings.endpoint, credentials)
    }

    pub fn annotate_url(&self) -> String {
        format!("{}{}", self.endpoint, ANNOTATE_PATH)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn send(&self, request: &AnnotateRequest) -> Result<Vec<FaceAnnotation>, DetectionError> {
        let url = self.annotate_url();
        let builder = self.client.post(&url).json(request);
        let builder = match &self.credentials {
            Credentials::ApiKey(key) => builder.query(&[("key", key)]),
            Credentials::AccessToken(token) => builder.bearer_auth(token),
        };

        let transport = |e| DetectionError::Transport {
            url: url.clone(),
            source: e,
        };
        let response = builder.send().map_err(transport)?;
        let status = response.status();
        let body = response.text().map_err(transport)?;
        log::debug!("POST {url} -> {status}");

        if status == StatusCode::BAD_REQUEST {
            return Err(DetectionError::MalformedRequest(vision_wire::error_message(
                &body,
            )));
        }
        if !status.is_success() {
            return Err(DetectionError::Upstream {
                status: status.as_u16(),
                message: vision_wire::error_message(&body),
            });
        }
        vision_wire::parse_response(&body)
    }
}

/// Rejects payloads that are not an image format the service accepts,
/// before anything is sent.
fn ensure_image(path: &Path, bytes: &[u8]) -> Result<(), DetectionError> {
    image::guess_format(bytes).map(|_| ()).map_err(|e| {
        DetectionError::MalformedRequest(format!("{} is not an image ({e})", path.display()))
    })
}

impl FaceDetector for VisionApiDetector {
    fn detect(
        &self,
        path: &Path,
        max_results: u32,
    ) -> Result<Vec<FaceAnnotation>, DetectionError> {
        if max_results == 0 {
            return Err(DetectionError::MalformedRequest(
                "max_results must be at least 1".to_string(),
            ));
        }
        let bytes = fs::read(path).map_err(|e| DetectionError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        ensure_image(path, &bytes)?;

        log::info!(
            "Requesting face detection for {} ({} bytes, max {max_results})",
            path.display(),
            bytes.len()
        );
        let faces = self.send(&AnnotateRequest::face_detection(&bytes, max_results))?;
        log::debug!("Vision service returned {} face annotation(s)", faces.len());
        Ok(faces)
    }
}
