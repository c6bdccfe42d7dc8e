//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while configuring the extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML could not be parsed or produced
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}
