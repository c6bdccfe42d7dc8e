//! Parse the model's final answer into verdict text

use crate::error::AgentError;
use serde::Deserialize;
use serde_json::Value;

/// Shape of the structured answer
#[derive(Debug, Deserialize)]
pub struct ResponseFormat {
    /// Verdict text
    pub fact_check_response: String,
}

/// Read the verdict from the response tool's arguments
pub fn parse_response_args(args: &Value) -> Result<String, AgentError> {
    let response: ResponseFormat = serde_json::from_value(args.clone())
        .map_err(|e| AgentError::MalformedResponse(format!("Invalid response arguments: {}", e)))?;
    non_blank(response.fact_check_response)
}

/// Read the verdict from a plain-text answer holding the JSON object
pub fn parse_text_response(text: &str) -> Result<String, AgentError> {
    if text.trim().is_empty() {
        return Err(AgentError::MalformedResponse(
            "Model returned an empty answer".to_string(),
        ));
    }

    let json_str = extract_json(text)?;
    let response: ResponseFormat = serde_json::from_str(json_str)
        .map_err(|e| AgentError::MalformedResponse(format!("JSON parse error: {}", e)))?;
    non_blank(response.fact_check_response)
}

fn non_blank(text: String) -> Result<String, AgentError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AgentError::MalformedResponse(
            "fact_check_response is empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<&str, AgentError> {
    let trimmed = response.trim();

    // Check if wrapped in markdown code block
    let body = if trimmed.starts_with("```") {
        let after_fence = trimmed
            .find('\n')
            .map(|idx| &trimmed[idx + 1..])
            .ok_or_else(|| AgentError::MalformedResponse("Empty code block".to_string()))?;
        after_fence
            .trim_end()
            .strip_suffix("```")
            .unwrap_or(after_fence)
            .trim()
    } else {
        trimmed
    };

    // Tolerate prose around the object
    match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&body[start..=end]),
        _ => Err(AgentError::MalformedResponse(format!(
            "No JSON object in answer: {}",
            preview(body)
        ))),
    }
}

fn preview(text: &str) -> String {
    const MAX: usize = 80;
    match text.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
