use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/crackctl/config.toml` on Linux, the platform equivalent
    /// elsewhere. Falls back to the current directory if no config dir exists.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("crackctl").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates an explicit config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `engine.install_dir` is not empty
    /// - `engine.binary`, when set, is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.install_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "engine.install_dir must not be empty".to_string(),
            });
        }

        if let Some(binary) = &self.engine.binary {
            if binary.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "engine.binary must not be empty when set".to_string(),
                });
            }
        }

        Ok(())
    }
}
