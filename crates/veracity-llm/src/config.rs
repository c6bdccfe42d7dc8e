//! Gemini provider configuration

use crate::LlmError;
use serde::{Deserialize, Serialize};

/// Default Gemini API base URL
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default timeout for a single model call (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection and generation settings for [`GeminiProvider`](crate::GeminiProvider)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API base URL, without the `/models/...` suffix
    pub endpoint: String,

    /// Model identifier
    pub model: String,

    /// Sampling temperature (0.0 = deterministic)
    pub temperature: f32,

    /// Upper bound on generated tokens per call
    pub max_output_tokens: u32,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            max_output_tokens: 1000,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.endpoint.trim().is_empty() {
            return Err(LlmError::Config("endpoint must not be empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(LlmError::Config("model must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(LlmError::Config(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(LlmError::Config(
                "max_output_tokens must be greater than 0".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(LlmError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, LlmError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| LlmError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String, LlmError> {
        toml::to_string_pretty(self).map_err(|e| LlmError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.max_output_tokens, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_temperature() {
        let config = GeminiConfig {
            temperature: 3.5,
            ..GeminiConfig::default()
        };
        assert!(matches!(config.validate(), Err(LlmError::Config(_))));
    }

    #[test]
    fn test_empty_model_rejected() {
        let config = GeminiConfig {
            model: "  ".to_string(),
            ..GeminiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_fills_defaults() {
        let config = GeminiConfig::from_toml("model = \"gemini-2.5-pro\"").unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.max_output_tokens, 1000);

        let round_trip = GeminiConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = GeminiConfig {
            timeout_secs: 0,
            ..GeminiConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
