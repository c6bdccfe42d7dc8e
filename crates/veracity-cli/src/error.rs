//! Error types for the CLI application.

use thiserror::Error;
use veracity_agent::{AgentError, ToolError};
use veracity_domain::ErrorKind;
use veracity_evidence::RetrievalError;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid fact checker settings
    #[error("Configuration error: {0}")]
    Checker(#[from] veracity_agent::ConfigError),

    /// Agent could not be built
    #[error("Agent failed to initialize: {0}")]
    Agent(#[from] AgentError),

    /// Evidence lookup failed
    #[error("Information retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),

    /// Retrieval tool failure
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// No API key in the environment
    #[error("GEMINI_API_KEY environment variable not set. Please set it to run the agent.")]
    MissingCredential,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Editor error: {0}")]
    Editor(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Pipeline error kind, where one applies
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            CliError::Agent(e) => Some(e.kind()),
            CliError::Retrieval(e) => Some(e.kind()),
            CliError::Tool(e) => Some(e.kind()),
            CliError::MissingCredential => Some(ErrorKind::MissingCredential),
            _ => None,
        }
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Editor(err.to_string())
    }
}
