//! Application configuration persisted as TOML under the `.reqdash` dir.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

use super::fetch::DEFAULT_FETCH_LIMIT;

/// Filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be resolved or created.
    #[error(transparent)]
    Dir(#[from] app_dirs::AppDirError),
    /// Reading or writing the config file failed.
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file exists but is not valid TOML.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The config could not be serialized for saving.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

/// Where and how to reach the records backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the backend API; the records endpoint lives beneath it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `limit` query parameter sent with each records fetch.
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fetch_limit: default_fetch_limit(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_fetch_limit() -> u32 {
    DEFAULT_FETCH_LIMIT
}

/// Load the config from disk, falling back to defaults when no file exists.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from(&config_path()?)
}

/// Persist the config to disk.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to(&config_path()?, config)
}

fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn save_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let raw = toml::to_string_pretty(config)?;
    std::fs::write(path, raw).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
