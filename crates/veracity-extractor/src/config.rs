//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use veracity_domain::MAX_TOPICS;

/// Effectively unbounded phrase length
pub const DEFAULT_MAX_PHRASE_WORDS: usize = 100_000;

/// Configuration for the RAKE extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Number of ranked phrases returned as topics (1..=3)
    pub max_topics: usize,

    /// Shortest candidate phrase, in words
    pub min_phrase_words: usize,

    /// Longest candidate phrase, in words; longer runs are split
    pub max_phrase_words: usize,

    /// Input beyond this many characters is ignored
    pub max_text_length: usize,

    /// Stop-words added to the built-in English list
    pub extra_stopwords: Vec<String>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_topics == 0 || self.max_topics > MAX_TOPICS {
            return Err(ExtractorError::Config(format!(
                "max_topics must be between 1 and {}",
                MAX_TOPICS
            )));
        }
        if self.min_phrase_words == 0 {
            return Err(ExtractorError::Config(
                "min_phrase_words must be greater than 0".to_string(),
            ));
        }
        if self.min_phrase_words > self.max_phrase_words {
            return Err(ExtractorError::Config(
                "min_phrase_words cannot exceed max_phrase_words".to_string(),
            ));
        }
        if self.max_text_length == 0 {
            return Err(ExtractorError::Config(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_topics: MAX_TOPICS,
            min_phrase_words: 1,
            max_phrase_words: DEFAULT_MAX_PHRASE_WORDS,
            max_text_length: 10_000,
            extra_stopwords: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ExtractorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_max_topics_bounded() {
        let mut config = ExtractorConfig::default();
        config.max_topics = 4;
        assert!(config.validate().is_err());
        config.max_topics = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_phrase_bounds() {
        let mut config = ExtractorConfig::default();
        config.min_phrase_words = 5;
        config.max_phrase_words = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml("max_topics = 2").unwrap();
        assert_eq!(config.max_topics, 2);
        assert_eq!(config.max_phrase_words, DEFAULT_MAX_PHRASE_WORDS);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(matches!(
            ExtractorConfig::from_toml("max_topics = 9"),
            Err(ExtractorError::Config(_))
        ));
        assert!(matches!(
            ExtractorConfig::from_toml("max_topics = \"three\""),
            Err(ExtractorError::Toml(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ExtractorConfig::default();
        config.extra_stopwords = vec!["claim".to_string()];
        let parsed = ExtractorConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
