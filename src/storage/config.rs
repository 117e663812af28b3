use super::Result;
use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use crate::error::{ConfigError, StorageError};
use crate::utils::validation::validate_url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Deployment settings read from `config.toml`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub image_host: String,
    pub timeout_ms: u64,
    pub template_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            image_host: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            template_path: None,
        }
    }
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => match Self::config_file_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("{}: {}", config_path.display(), e),
            })?;

        log::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    fn config_file_path() -> Option<PathBuf> {
        let config_dir = dirs::config_dir()?;
        Some(config_dir.join("guide-seo").join("config.toml"))
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_url("image_host", &self.image_host)?;

        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms".to_string(),
                value: "0".to_string(),
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
