//! Configuration for the verification agent

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use veracity_evidence::WikipediaConfig;
use veracity_extractor::ExtractorConfig;
use veracity_llm::GeminiConfig;

/// Errors loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A section failed validation
    #[error("Invalid [{section}] config: {message}")]
    Invalid {
        /// Offending table
        section: &'static str,
        /// Validation message
        message: String,
    },
}

/// Agent loop limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Maximum model turns per verification
    pub max_iterations: usize,

    /// Upper bound on a whole verification (seconds)
    pub verification_timeout_secs: u64,
}

impl AgentConfig {
    /// Get the verification timeout as a Duration
    pub fn verification_timeout(&self) -> Duration {
        Duration::from_secs(self.verification_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than 0".to_string());
        }
        if self.verification_timeout_secs == 0 {
            return Err("verification_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_iterations: 6,
            verification_timeout_secs: 120,
        }
    }
}

/// Everything needed to build a fact checker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Topic extraction
    pub extractor: ExtractorConfig,

    /// Knowledge source
    pub wikipedia: WikipediaConfig,

    /// Language model
    pub gemini: GeminiConfig,

    /// Agent loop limits
    pub agent: AgentConfig,
}

impl CheckerConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(section: &'static str, message: impl ToString) -> ConfigError {
            ConfigError::Invalid {
                section,
                message: message.to_string(),
            }
        }

        self.extractor
            .validate()
            .map_err(|e| invalid("extractor", e))?;
        self.wikipedia
            .validate()
            .map_err(|e| invalid("wikipedia", e))?;
        self.gemini.validate().map_err(|e| invalid("gemini", e))?;
        self.agent.validate().map_err(|e| invalid("agent", e))?;
        Ok(())
    }

    /// Parse and validate from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
