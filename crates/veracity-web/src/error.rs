//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use veracity_domain::ErrorKind;

/// Message shown when no agent can be used
pub const AGENT_UNAVAILABLE: &str =
    "Agent failed to initialize. Please ensure GEMINI_API_KEY is set.";

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Failure category
    pub kind: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Blank claim submitted
    EmptyClaim,
    /// No API key in the environment
    MissingCredential,
    /// Agent construction failed
    AgentUnavailable(String),
}

impl AppError {
    fn kind(&self) -> ErrorKind {
        match self {
            AppError::EmptyClaim => ErrorKind::EmptyClaim,
            AppError::MissingCredential => ErrorKind::MissingCredential,
            AppError::AgentUnavailable(_) => ErrorKind::AgentInvocationFailure,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind().to_string();
        let (status, message) = match self {
            AppError::EmptyClaim => (
                StatusCode::BAD_REQUEST,
                "Claim cannot be empty".to_string(),
            ),
            AppError::MissingCredential => {
                (StatusCode::SERVICE_UNAVAILABLE, AGENT_UNAVAILABLE.to_string())
            }
            AppError::AgentUnavailable(detail) => {
                error!("Agent unavailable: {}", detail);
                (StatusCode::SERVICE_UNAVAILABLE, AGENT_UNAVAILABLE.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            kind,
        });
        (status, body).into_response()
    }
}
