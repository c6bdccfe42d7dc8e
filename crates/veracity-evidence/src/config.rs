//! Wikipedia client configuration

use crate::error::RetrievalError;
use serde::{Deserialize, Serialize};

/// Default MediaWiki Action API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Default request timeout (15 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default cap on document content, in characters
pub const DEFAULT_MAX_DOCUMENT_CHARS: usize = 4000;

/// Connection settings for [`WikipediaClient`](crate::WikipediaClient)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikipediaConfig {
    /// MediaWiki Action API URL
    pub endpoint: String,

    /// Document content is cut to this many characters
    pub max_document_chars: usize,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent sent with every request
    pub user_agent: String,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_document_chars: DEFAULT_MAX_DOCUMENT_CHARS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!(
                "veracity/",
                env!("CARGO_PKG_VERSION"),
                " (claim fact-checking agent)"
            )
            .to_string(),
        }
    }
}

impl WikipediaConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), RetrievalError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(RetrievalError::Config(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if self.max_document_chars == 0 {
            return Err(RetrievalError::Config(
                "max_document_chars must be greater than 0".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(RetrievalError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(RetrievalError::Config(
                "user_agent must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, RetrievalError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| RetrievalError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String, RetrievalError> {
        toml::to_string_pretty(self).map_err(|e| RetrievalError::Config(e.to_string()))
    }
}
