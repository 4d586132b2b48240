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
    /// Uses `~/.config/buster/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("buster").join("config.toml")
    }

    /// Default log file for the terminal UI.
    pub fn default_log_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("buster").join("buster.log")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint is an absolute http(s) URL
    /// - Timeouts are non-zero
    /// - Deleting is strictly faster than typing, and neither cadence is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let analysis = &self.analysis;
        let parsed = reqwest::Url::parse(&analysis.endpoint).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid analysis endpoint '{}': {}", analysis.endpoint, e),
            }
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Analysis endpoint must use http or https, got '{}'",
                    parsed.scheme()
                ),
            });
        }

        if analysis.timeout_seconds == 0 || analysis.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Analysis timeouts must be greater than zero".to_string(),
            });
        }

        let banner = &self.banner;
        if banner.typing_ms == 0 || banner.deleting_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "Banner cadences must be greater than zero".to_string(),
            });
        }
        if banner.deleting_ms >= banner.typing_ms {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Banner deleting cadence ({}ms) must be faster than typing cadence ({}ms)",
                    banner.deleting_ms, banner.typing_ms
                ),
            });
        }

        Ok(())
    }
}
