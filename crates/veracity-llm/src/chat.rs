//! Provider-neutral conversation types
//!
//! A request carries a system instruction, the message history and the
//! function declarations the model may call. The model answers with a
//! single message whose parts are text and/or function calls.

use serde_json::Value;

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// End user, and function results sent back to the model
    User,
    /// The language model
    Model,
}

/// A function call requested by the model
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Declared function name
    pub name: String,
    /// Arguments as a JSON object
    pub args: Value,
    /// Opaque provider token that must be echoed back with the call
    pub signature: Option<String>,
}

/// Result of executing a function call
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionResponse {
    /// Name of the function that was called
    pub name: String,
    /// JSON object handed back to the model
    pub response: Value,
}

/// One part of a message
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// Plain text
    Text(String),
    /// Model-requested function call
    FunctionCall(FunctionCall),
    /// Function result
    FunctionResponse(FunctionResponse),
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Author
    pub role: Role,
    /// Ordered parts
    pub parts: Vec<Part>,
}

impl ChatMessage {
    /// User message holding plain text
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::Text(text.into())],
        }
    }

    /// Model message holding plain text
    pub fn model_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::Text(text.into())],
        }
    }

    /// Model message requesting a single function call
    pub fn model_call(name: impl Into<String>, args: Value) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::FunctionCall(FunctionCall {
                name: name.into(),
                args,
                signature: None,
            })],
        }
    }

    /// User message carrying function results
    pub fn function_responses(responses: Vec<FunctionResponse>) -> Self {
        Self {
            role: Role::User,
            parts: responses.into_iter().map(Part::FunctionResponse).collect(),
        }
    }

    /// Function calls in this message, in order
    pub fn function_calls(&self) -> Vec<&FunctionCall> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::FunctionCall(call) => Some(call),
                _ => None,
            })
            .collect()
    }

    /// Concatenated text parts
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// A function the model may call
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    /// Function name
    pub name: String,
    /// Natural-language description the model reasons over
    pub description: String,
    /// JSON Schema of the arguments object
    pub parameters: Value,
}

/// A single model invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Fixed role instruction
    pub system_instruction: String,
    /// Conversation so far
    pub messages: Vec<ChatMessage>,
    /// Callable functions
    pub tools: Vec<FunctionDeclaration>,
}
