//! Veracity LLM Provider Layer
//!
//! Chat-style model access with function calling.
//!
//! # Architecture
//!
//! The [`LlmProvider`] trait takes a [`ChatRequest`] (system instruction,
//! history, function declarations) and returns the model's next message.
//! The fact-checking agent drives its tool loop through this trait, so a
//! scripted provider can stand in for the hosted model in tests.
//!
//! # Providers
//!
//! - `MockProvider`: Scripted responses for testing
//! - `GeminiProvider`: Google Gemini `generateContent` API
//!
//! # Examples
//!
//! ```
//! use veracity_llm::{ChatMessage, ChatRequest, LlmProvider, MockProvider};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let provider = MockProvider::new();
//! provider.push_turn(ChatMessage::model_text("Hello from LLM!"));
//!
//! let request = ChatRequest {
//!     system_instruction: "Be brief.".to_string(),
//!     messages: vec![ChatMessage::user_text("Hi")],
//!     tools: vec![],
//! };
//! let reply = provider.complete(&request).await.unwrap();
//! assert_eq!(reply.text(), "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod chat;
pub mod config;
pub mod credential;
pub mod gemini;

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use veracity_domain::ErrorKind;

pub use chat::{
    ChatMessage, ChatRequest, FunctionCall, FunctionDeclaration, FunctionResponse, Part, Role,
};
pub use config::GeminiConfig;
pub use credential::{api_key_from_env, credential_configured, API_KEY_VARS};
pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No API key in the environment or configuration
    #[error("API key not configured (set {})", API_KEY_VARS.join(" or "))]
    MissingCredential,

    /// API key rejected by the provider
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Request did not complete in time
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Invalid provider configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl LlmError {
    /// Failure category reported to the user
    pub fn kind(&self) -> ErrorKind {
        match self {
            LlmError::MissingCredential => ErrorKind::MissingCredential,
            _ => ErrorKind::AgentInvocationFailure,
        }
    }
}

/// A chat model that can request function calls
pub trait LlmProvider {
    /// Produce the model's next message for the conversation
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatMessage, LlmError>> + Send;

    /// Model identifier, for logging
    fn model_name(&self) -> &str;
}

/// Mock LLM provider for deterministic testing
///
/// Replies are served from a script in the order they were pushed. Once the
/// script runs out, every call fails. Requests are recorded so tests can
/// inspect what the agent sent.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use veracity_llm::{ChatMessage, MockProvider};
///
/// let provider = MockProvider::new();
/// provider.push_turn(ChatMessage::model_call("lookup", json!({"claim": "x"})));
/// provider.push_error("quota exhausted");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    script: Arc<Mutex<VecDeque<Result<ChatMessage, String>>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockProvider {
    /// Create a provider with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider that replies with the given messages in order
    pub fn scripted(turns: impl IntoIterator<Item = ChatMessage>) -> Self {
        let provider = Self::new();
        for turn in turns {
            provider.push_turn(turn);
        }
        provider
    }

    /// Queue a reply
    pub fn push_turn(&self, turn: ChatMessage) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(turn));
    }

    /// Queue a failure
    pub fn push_error(&self, message: impl Into<String>) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(message.into()));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn next_reply(&self, request: &ChatRequest) -> Result<ChatMessage, LlmError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        match self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
        {
            Some(Ok(turn)) => Ok(turn),
            Some(Err(message)) => Err(LlmError::Other(message)),
            None => Err(LlmError::Other("Mock script exhausted".to_string())),
        }
    }
}

impl LlmProvider for MockProvider {
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatMessage, LlmError>> + Send {
        let reply = self.next_reply(request);
        async move { reply }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
