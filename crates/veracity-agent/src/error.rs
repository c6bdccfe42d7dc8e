//! Error types for the verification agent

use thiserror::Error;
use veracity_domain::ErrorKind;
use veracity_llm::LlmError;

/// Errors raised by the retrieval tool
///
/// These are reported back to the model as function results rather than
/// aborting the agent loop.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The claim yielded no topic phrases
    #[error("No topic found for the claim")]
    NoTopicFound,

    /// The knowledge source failed
    #[error("Information retrieval failed: {0}")]
    Retrieval(String),

    /// The model sent arguments that do not match the schema
    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    /// The model called a tool that was never declared
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl ToolError {
    /// Failure category
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::NoTopicFound => ErrorKind::NoTopicFound,
            ToolError::Retrieval(_) => ErrorKind::RetrievalFailure,
            ToolError::InvalidArguments(_) | ToolError::UnknownTool(_) => {
                ErrorKind::AgentInvocationFailure
            }
        }
    }
}

/// Errors that end a verification run
#[derive(Error, Debug)]
pub enum AgentError {
    /// Blank claim
    #[error("No claim provided to fact check.")]
    EmptyClaim,

    /// Model call failed
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Final answer did not carry a usable verdict
    #[error("Malformed agent response: {0}")]
    MalformedResponse(String),

    /// The model kept calling tools without answering
    #[error("No verdict after {0} model turns")]
    IterationLimit(usize),

    /// Verification exceeded its time budget
    #[error("Verification timed out after {0}s")]
    Timeout(u64),

    /// Agent could not be constructed from its configuration
    #[error("Agent configuration error: {0}")]
    Config(String),
}

impl AgentError {
    /// Failure category reported to the user
    pub fn kind(&self) -> ErrorKind {
        match self {
            AgentError::EmptyClaim => ErrorKind::EmptyClaim,
            AgentError::Llm(e) => e.kind(),
            _ => ErrorKind::AgentInvocationFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_kinds() {
        assert_eq!(ToolError::NoTopicFound.kind(), ErrorKind::NoTopicFound);
        assert_eq!(
            ToolError::Retrieval("down".to_string()).kind(),
            ErrorKind::RetrievalFailure
        );
    }

    #[test]
    fn test_agent_error_kinds() {
        assert_eq!(AgentError::EmptyClaim.kind(), ErrorKind::EmptyClaim);
        assert_eq!(
            AgentError::Llm(LlmError::MissingCredential).kind(),
            ErrorKind::MissingCredential
        );
        assert_eq!(
            AgentError::Llm(LlmError::RateLimitExceeded).kind(),
            ErrorKind::AgentInvocationFailure
        );
        assert_eq!(
            AgentError::IterationLimit(6).kind(),
            ErrorKind::AgentInvocationFailure
        );
    }

    #[test]
    fn test_llm_error_is_transparent() {
        let err = AgentError::from(LlmError::RateLimitExceeded);
        assert_eq!(err.to_string(), "Rate limit exceeded");
    }
}
