//! Application Configuration
//!
//! Loaded from an optional JSON file (`huby.json` by default). Every
//! field has a default, so a missing file yields a runnable development
//! configuration; a file that exists but does not parse is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http::HttpServerConfig;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this schema
    #[error("malformed config '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the space dataset
    #[serde(default = "default_data_path")]
    pub data: PathBuf,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/coworkings.json")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: default_data_path(),
            http: HttpServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load from a JSON file, falling back to defaults when the file
    /// does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
