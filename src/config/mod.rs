//! Configuration for the gimmeanuuid CLI
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`GIMMEANUUID_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use gimmeanuuid::config::GimmeConfig;
//!
//! let toml = r#"
//! [client]
//! base_url = "https://uuid.example.org"
//! "#;
//! let config: GimmeConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.client.base_url, "https://uuid.example.org");
//! assert_eq!(config.client.timeout_seconds, 10);
//! ```

pub mod client;
pub mod error;
pub mod logging;

pub use client::ClientConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GimmeConfig {
    /// UUID service and HTTP transport settings
    pub client: ClientConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl GimmeConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are silently ignored (current values are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var("GIMMEANUUID_BASE_URL") {
            self.client.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("GIMMEANUUID_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.client.timeout_seconds = t;
            }
        }

        if let Ok(level) = std::env::var("GIMMEANUUID_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("GIMMEANUUID_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client.base_url.is_empty() {
            return Err(ConfigError::Validation {
                field: "client.base_url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        }
        if let Err(e) = Url::parse(&self.client.base_url) {
            return Err(ConfigError::Validation {
                field: "client.base_url".to_string(),
                message: e.to_string(),
            });
        }

        if self.client.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "client.timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_config_defaults() {
        let config = GimmeConfig::default();
        assert_eq!(config.client.base_url, "http://localhost:8080");
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_full_toml() {
        let toml = include_str!("../../gimmeanuuid.example.toml");
        let config: GimmeConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.client.timeout_seconds > 0);
    }

    #[test]
    fn test_config_load_from_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[client]\ntimeout_seconds = 42").unwrap();

        let config = GimmeConfig::load(Some(temp.path())).unwrap();
        assert_eq!(config.client.timeout_seconds, 42);
        assert_eq!(config.client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[client\nbase_url =").unwrap();

        let result = GimmeConfig::load(Some(temp.path()));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_missing_file_error() {
        let result = GimmeConfig::load(Some(Path::new("/nonexistent/gimmeanuuid.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_config_load_none_returns_defaults() {
        let config = GimmeConfig::load(None).unwrap();
        assert_eq!(config, GimmeConfig::default());
    }

    #[test]
    fn test_config_env_override_base_url() {
        std::env::set_var("GIMMEANUUID_BASE_URL", "http://10.0.0.5:9000");
        let config = GimmeConfig::default().with_env_overrides();
        std::env::remove_var("GIMMEANUUID_BASE_URL");

        assert_eq!(config.client.base_url, "http://10.0.0.5:9000");
    }

    #[test]
    fn test_config_env_invalid_timeout_ignored() {
        std::env::set_var("GIMMEANUUID_TIMEOUT", "soon");
        let config = GimmeConfig::default().with_env_overrides();
        std::env::remove_var("GIMMEANUUID_TIMEOUT");

        assert_eq!(config.client.timeout_seconds, 10);
    }

    #[test]
    fn test_config_env_override_log_level() {
        std::env::set_var("GIMMEANUUID_LOG_LEVEL", "debug");
        let config = GimmeConfig::default().with_env_overrides();
        std::env::remove_var("GIMMEANUUID_LOG_LEVEL");

        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_env_override_log_format() {
        std::env::set_var("GIMMEANUUID_LOG_FORMAT", "json");
        let config = GimmeConfig::default().with_env_overrides();
        assert_eq!(config.logging.format, LogFormat::Json);

        // Invalid format keeps default
        std::env::set_var("GIMMEANUUID_LOG_FORMAT", "xml");
        let config = GimmeConfig::default().with_env_overrides();
        std::env::remove_var("GIMMEANUUID_LOG_FORMAT");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_config_validation_empty_base_url() {
        let mut config = GimmeConfig::default();
        config.client.base_url = String::new();

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field == "client.base_url"
        ));
    }

    #[test]
    fn test_config_validation_unparseable_base_url() {
        let mut config = GimmeConfig::default();
        config.client.base_url = "localhost without scheme".to_string();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { ref field, .. }) if field == "client.base_url"
        ));
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let mut config = GimmeConfig::default();
        config.client.timeout_seconds = 0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { ref field, .. }) if field == "client.timeout_seconds"
        ));
    }
}
