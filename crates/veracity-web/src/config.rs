//! Configuration file parsing for the web server.
//!
//! Loads the bind address and port plus the `[checker]` table that
//! configures extraction, retrieval, the model and the agent loop.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use veracity_agent::CheckerConfig;

/// Web configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Checker settings failed validation
    #[error("{0}")]
    Checker(#[from] veracity_agent::ConfigError),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Web server configuration loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 8501)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Fact checker settings
    #[serde(default)]
    pub checker: CheckerConfig,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Default port: 8501
fn default_bind_port() -> u16 {
    8501
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            checker: CheckerConfig::default(),
        }
    }
}

impl WebConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: WebConfig = toml::from_str(&contents)?;

        if config.bind_address.trim().is_empty() {
            return Err(ConfigError::MissingField("bind_address".to_string()));
        }
        config.checker.validate()?;

        Ok(config)
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = WebConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8501);
        assert_eq!(config.checker.gemini.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_bind_addr() {
        let config = WebConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8501");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000

            [checker.gemini]
            model = "gemini-2.5-pro"

            [checker.wikipedia]
            endpoint = "https://de.wikipedia.org/w/api.php"

            [checker.agent]
            verification_timeout_secs = 60
        "#;

        let config: WebConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.checker.gemini.model, "gemini-2.5-pro");
        assert_eq!(
            config.checker.wikipedia.endpoint,
            "https://de.wikipedia.org/w/api.php"
        );
        assert_eq!(config.checker.agent.verification_timeout_secs, 60);
        assert_eq!(config.checker.agent.max_iterations, 6);
    }

    #[test]
    fn test_from_file_validates_checker() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[checker.extractor]\nmax_topics = 9").unwrap();

        let result = WebConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Checker(_))));
    }

    #[test]
    fn test_from_file_rejects_blank_address() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_address = \" \"").unwrap();

        let result = WebConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::MissingField(_))));
    }
}
