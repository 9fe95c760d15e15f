use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::constants::{
    DEFAULT_MAX_RESULTS, DEFAULT_OUTLINE_THICKNESS, ENV_ACCESS_TOKEN, ENV_API_KEY, ENV_ENDPOINT,
    VISION_API_ENDPOINT,
};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Runtime configuration for the detection client and outliner.
///
/// Layered: defaults, then the JSON settings file, then environment
/// variables. The CLI applies its own flags on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub max_results: u32,
    pub outline_thickness: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: VISION_API_ENDPOINT.to_string(),
            api_key: None,
            access_token: None,
            max_results: DEFAULT_MAX_RESULTS,
            outline_thickness: DEFAULT_OUTLINE_THICKNESS,
        }
    }
}

impl Settings {
    /// `<config dir>/FaceOutline/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("FaceOutline").join("settings.json"))
    }

    /// Loads settings from `path`, or from [`Settings::default_path`] when
    /// `None`, then applies environment overrides.
    ///
    /// A missing default file yields defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let settings = match path {
            Some(p) => Self::from_file(p)?,
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };
        Ok(settings.with_env_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Applies overrides from a variable lookup. Empty values are ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(endpoint) = get(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(token) = get(ENV_ACCESS_TOKEN) {
            self.access_token = Some(token);
        }
        self
    }
}
