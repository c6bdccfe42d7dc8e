//! Gemini Provider Implementation
//!
//! Talks to the Gemini `generateContent` REST API with function calling.
//!
//! # Features
//!
//! - Async HTTP communication with the Gemini API
//! - Configurable endpoint, model and generation settings
//! - Timeout handling
//!
//! Calls are not retried; a failed call surfaces to the agent immediately.
//!
//! # Examples
//!
//! ```no_run
//! use veracity_llm::{GeminiConfig, GeminiProvider};
//!
//! // Reads GOOGLE_API_KEY (or GEMINI_API_KEY)
//! let provider = GeminiProvider::from_env(GeminiConfig::default());
//! ```

use crate::chat::{ChatMessage, ChatRequest, FunctionCall, FunctionResponse, Part, Role};
use crate::config::GeminiConfig;
use crate::credential::api_key_from_env;
use crate::{LlmError, LlmProvider};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API provider
pub struct GeminiProvider {
    config: GeminiConfig,
    api_key: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("config", &self.config)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Request body for the generateContent API
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: WireContent,
    contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<WirePart>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function_call: Option<WireFunctionCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function_response: Option<WireFunctionResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thought: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thought_signature: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    #[serde(default)]
    args: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireFunctionResponse {
    name: String,
    response: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTool {
    function_declarations: Vec<WireFunctionDeclaration>,
}

#[derive(Serialize)]
struct WireFunctionDeclaration {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

/// Response from the generateContent API
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<WireContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Error envelope returned on non-2xx statuses
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingCredential`] for a blank key and
    /// [`LlmError::Config`] for invalid settings.
    pub fn new(config: GeminiConfig, api_key: impl Into<String>) -> Result<Self, LlmError> {
        config.validate()?;

        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingCredential);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    /// Create a provider using the API key from the environment
    pub fn from_env(config: GeminiConfig) -> Result<Self, LlmError> {
        let api_key = api_key_from_env().ok_or(LlmError::MissingCredential)?;
        Self::new(config, api_key)
    }

    /// Get the active configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Ask the model for its next message
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The API cannot be reached or times out
    /// - The key is rejected or the model does not exist
    /// - The quota is exhausted
    /// - The response is blocked or malformed
    pub async fn generate(&self, request: &ChatRequest) -> Result<ChatMessage, LlmError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );
        let body = self.build_request(request);

        debug!(
            "Calling {} with {} messages",
            self.config.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(self.map_status_error(status, &error_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout(self.config.timeout_secs)
            } else {
                LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
            }
        })?;

        parse_response(parsed)
    }

    fn build_request(&self, request: &ChatRequest) -> GenerateContentRequest {
        let tools = if request.tools.is_empty() {
            Vec::new()
        } else {
            vec![WireTool {
                function_declarations: request
                    .tools
                    .iter()
                    .map(|t| WireFunctionDeclaration {
                        name: t.name.clone(),
                        description: t.description.clone(),
                        parameters: t.parameters.clone(),
                    })
                    .collect(),
            }]
        };

        GenerateContentRequest {
            system_instruction: WireContent {
                role: None,
                parts: vec![WirePart {
                    text: Some(request.system_instruction.clone()),
                    ..WirePart::default()
                }],
            },
            contents: request.messages.iter().map(to_wire_content).collect(),
            tools,
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        }
    }

    fn map_transport_error(&self, error: reqwest::Error) -> LlmError {
        if error.is_timeout() {
            LlmError::Timeout(self.config.timeout_secs)
        } else {
            LlmError::Communication(format!("Request failed: {}", error))
        }
    }

    fn map_status_error(&self, status: reqwest::StatusCode, body: &str) -> LlmError {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| body.to_string());

        warn!("Gemini returned HTTP {}: {}", status, message);

        match status {
            reqwest::StatusCode::NOT_FOUND => {
                LlmError::ModelNotAvailable(self.config.model.clone())
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                LlmError::Authentication(message)
            }
            _ => LlmError::Communication(format!("HTTP {}: {}", status, message)),
        }
    }
}

impl LlmProvider for GeminiProvider {
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatMessage, LlmError>> + Send {
        self.generate(request)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

fn to_wire_content(message: &ChatMessage) -> WireContent {
    let role = match message.role {
        Role::User => "user",
        Role::Model => "model",
    };
    let parts = message
        .parts
        .iter()
        .map(|part| match part {
            Part::Text(text) => WirePart {
                text: Some(text.clone()),
                ..WirePart::default()
            },
            Part::FunctionCall(call) => WirePart {
                function_call: Some(WireFunctionCall {
                    name: call.name.clone(),
                    args: call.args.clone(),
                }),
                thought_signature: call.signature.clone(),
                ..WirePart::default()
            },
            Part::FunctionResponse(resp) => WirePart {
                function_response: Some(WireFunctionResponse {
                    name: resp.name.clone(),
                    response: resp.response.clone(),
                }),
                ..WirePart::default()
            },
        })
        .collect();

    WireContent {
        role: Some(role.to_string()),
        parts,
    }
}

fn parse_response(response: GenerateContentResponse) -> Result<ChatMessage, LlmError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "unknown".to_string());
        return Err(LlmError::InvalidResponse(format!(
            "No candidates returned (block reason: {})",
            reason
        )));
    };

    let finish_reason = candidate
        .finish_reason
        .unwrap_or_else(|| "unknown".to_string());
    let content = candidate.content.ok_or_else(|| {
        LlmError::InvalidResponse(format!(
            "Candidate has no content (finish reason: {})",
            finish_reason
        ))
    })?;

    let parts: Vec<Part> = content
        .parts
        .into_iter()
        .filter(|p| p.thought != Some(true))
        .filter_map(|p| {
            if let Some(call) = p.function_call {
                Some(Part::FunctionCall(FunctionCall {
                    name: call.name,
                    args: call.args,
                    signature: p.thought_signature,
                }))
            } else if let Some(resp) = p.function_response {
                Some(Part::FunctionResponse(FunctionResponse {
                    name: resp.name,
                    response: resp.response,
                }))
            } else {
                p.text.map(Part::Text)
            }
        })
        .collect();

    if parts.is_empty() {
        return Err(LlmError::InvalidResponse(format!(
            "Candidate has no usable parts (finish reason: {})",
            finish_reason
        )));
    }

    Ok(ChatMessage {
        role: Role::Model,
        parts,
    })
}
