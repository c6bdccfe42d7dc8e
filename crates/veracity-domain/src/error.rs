//! Error kinds shared across the pipeline
//!
//! Each crate has its own error enum; every one of them maps onto one of
//! these kinds so front ends can report failures uniformly.

use std::fmt;

/// Classification of pipeline failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Blank or whitespace-only input
    EmptyClaim,
    /// Topic extraction produced no phrases
    NoTopicFound,
    /// Network or decoding failure while fetching evidence
    RetrievalFailure,
    /// Failure inside the agent loop or while reading its structured output
    AgentInvocationFailure,
    /// The model credential is not configured
    MissingCredential,
}

impl ErrorKind {
    /// Stable identifier used in logs and JSON responses
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyClaim => "EmptyClaim",
            ErrorKind::NoTopicFound => "NoTopicFound",
            ErrorKind::RetrievalFailure => "RetrievalFailure",
            ErrorKind::AgentInvocationFailure => "AgentInvocationFailure",
            ErrorKind::MissingCredential => "MissingCredential",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::NoTopicFound.to_string(), "NoTopicFound");
        assert_eq!(ErrorKind::MissingCredential.as_str(), "MissingCredential");
    }
}
