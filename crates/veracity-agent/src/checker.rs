//! Core fact-checking agent

use crate::config::AgentConfig;
use crate::error::{AgentError, ToolError};
use crate::parser::{parse_response_args, parse_text_response};
use crate::prompt::system_prompt;
use crate::tools::{
    documents_to_json, error_to_json, response_tool_definition, InformationRetrievalTool,
    RESPONSE_TOOL, RETRIEVAL_TOOL,
};
use serde_json::Value;
use std::fmt::Display;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use veracity_domain::traits::{EvidenceSource, TopicExtractor};
use veracity_domain::{Claim, ErrorKind, Verdict};
use veracity_llm::{ChatMessage, ChatRequest, FunctionCall, FunctionResponse, LlmProvider};

/// Prefix of every verdict that stands in for an error
pub const ERROR_PREFIX: &str = "Error during fact checking: ";

/// A language model bound to the retrieval tool
///
/// Each verification starts from a fresh conversation; nothing is carried
/// between calls.
pub struct FactChecker<L, E, S> {
    llm: L,
    tool: InformationRetrievalTool<E, S>,
    config: AgentConfig,
    system_prompt: String,
}

impl<L, E, S> FactChecker<L, E, S>
where
    L: LlmProvider + Sync,
    E: TopicExtractor + Sync,
    S: EvidenceSource + Sync,
    S::Error: Display,
{
    /// Create a new fact checker
    pub fn new(llm: L, extractor: E, source: S, config: AgentConfig) -> Self {
        Self {
            llm,
            tool: InformationRetrievalTool::new(extractor, source),
            config,
            system_prompt: system_prompt(),
        }
    }

    /// Get the loop limits
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Verify a claim, converting any failure into displayable text
    pub async fn verify(&self, claim: &str) -> Verdict {
        match self.check(claim).await {
            Ok(text) => Verdict::Judgement(text),
            Err(AgentError::EmptyClaim) => {
                Verdict::failure(ErrorKind::EmptyClaim, AgentError::EmptyClaim.to_string())
            }
            Err(e) => {
                warn!("Fact check failed: {}", e);
                Verdict::failure(e.kind(), format!("{}{}", ERROR_PREFIX, e))
            }
        }
    }

    /// Verify a claim and return the model's verdict text
    pub async fn check(&self, claim: &str) -> Result<String, AgentError> {
        let claim = Claim::parse(claim).map_err(|_| AgentError::EmptyClaim)?;
        info!(
            "Verifying claim {} with {}: '{}'",
            claim.id(),
            self.llm.model_name(),
            claim.text()
        );

        let verdict = timeout(self.config.verification_timeout(), self.run(&claim))
            .await
            .map_err(|_| AgentError::Timeout(self.config.verification_timeout_secs))??;

        info!("Claim {} verified", claim.id());
        Ok(verdict)
    }

    async fn run(&self, claim: &Claim) -> Result<String, AgentError> {
        let tools = vec![
            InformationRetrievalTool::<E, S>::definition(),
            response_tool_definition(),
        ];
        let mut messages = vec![ChatMessage::user_text(claim.text())];

        for turn in 1..=self.config.max_iterations {
            let request = ChatRequest {
                system_instruction: self.system_prompt.clone(),
                messages: messages.clone(),
                tools: tools.clone(),
            };

            let reply = self.llm.complete(&request).await?;
            let calls: Vec<FunctionCall> = reply.function_calls().into_iter().cloned().collect();
            debug!(
                "Claim {} turn {}: {} function call(s)",
                claim.id(),
                turn,
                calls.len()
            );

            if let Some(answer) = calls.iter().find(|c| c.name == RESPONSE_TOOL) {
                return parse_response_args(&answer.args);
            }
            if calls.is_empty() {
                return parse_text_response(&reply.text());
            }

            messages.push(reply);
            let mut responses = Vec::with_capacity(calls.len());
            for call in &calls {
                responses.push(FunctionResponse {
                    name: call.name.clone(),
                    response: self.dispatch(call).await,
                });
            }
            messages.push(ChatMessage::function_responses(responses));
        }

        Err(AgentError::IterationLimit(self.config.max_iterations))
    }

    /// Run a tool call; failures become an error object for the model
    async fn dispatch(&self, call: &FunctionCall) -> Value {
        let result = match call.name.as_str() {
            RETRIEVAL_TOOL => self.tool.call(&call.args).await,
            other => Err(ToolError::UnknownTool(other.to_string())),
        };

        match result {
            Ok(documents) => documents_to_json(&documents),
            Err(e) => {
                warn!("Tool {} failed ({}): {}", call.name, e.kind(), e);
                error_to_json(&e)
            }
        }
    }
}
