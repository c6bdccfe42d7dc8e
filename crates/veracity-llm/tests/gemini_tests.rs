//! GeminiProvider against an in-process stand-in for the Gemini API

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use veracity_llm::{
    ChatMessage, ChatRequest, FunctionDeclaration, GeminiConfig, GeminiProvider, LlmError,
    LlmProvider,
};

#[derive(Clone, Default)]
struct Recorded {
    calls: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
}

async fn generate(
    State(recorded): State<Recorded>,
    Path(target): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    recorded
        .calls
        .lock()
        .unwrap()
        .push((target.clone(), key.clone(), body));

    if key.as_deref() != Some("good-key") {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": {"code": 403, "message": "API key not valid"}})),
        );
    }
    if !target.starts_with("gemini-2.5-flash:") {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": {"code": 404, "message": "model not found"}})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{
                        "functionCall": {
                            "name": "information_retrieving_tool",
                            "args": {"claim": "Earth is flat"}
                        }
                    }]
                },
                "finishReason": "STOP"
            }]
        })),
    )
}

async fn spawn_server() -> (String, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/v1beta/models/:target", post(generate))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1beta", addr), recorded)
}

fn request() -> ChatRequest {
    ChatRequest {
        system_instruction: "You are a fact-checking agent.".to_string(),
        messages: vec![ChatMessage::user_text("Earth is flat")],
        tools: vec![FunctionDeclaration {
            name: "information_retrieving_tool".to_string(),
            description: "Retrieve information".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {"claim": {"type": "string"}},
                "required": ["claim"]
            }),
        }],
    }
}

#[tokio::test]
async fn test_function_call_round_trip() {
    let (endpoint, recorded) = spawn_server().await;
    let config = GeminiConfig {
        endpoint,
        ..GeminiConfig::default()
    };
    let provider = GeminiProvider::new(config, "good-key").unwrap();

    let reply = provider.complete(&request()).await.unwrap();
    let calls = reply.function_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "information_retrieving_tool");
    assert_eq!(calls[0].args["claim"], "Earth is flat");

    let calls = recorded.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (target, key, body) = &calls[0];
    assert_eq!(target, "gemini-2.5-flash:generateContent");
    assert_eq!(key.as_deref(), Some("good-key"));
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Earth is flat");
    assert_eq!(
        body["tools"][0]["functionDeclarations"][0]["parameters"]["required"][0],
        "claim"
    );
}

#[tokio::test]
async fn test_rejected_key_is_authentication_error() {
    let (endpoint, _) = spawn_server().await;
    let config = GeminiConfig {
        endpoint,
        ..GeminiConfig::default()
    };
    let provider = GeminiProvider::new(config, "bad-key").unwrap();

    match provider.complete(&request()).await {
        Err(LlmError::Authentication(message)) => assert_eq!(message, "API key not valid"),
        other => panic!("Expected Authentication error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_model_is_not_available() {
    let (endpoint, recorded) = spawn_server().await;
    let config = GeminiConfig {
        endpoint,
        model: "gemini-0.1-nope".to_string(),
        ..GeminiConfig::default()
    };
    let provider = GeminiProvider::new(config, "good-key").unwrap();

    match provider.complete(&request()).await {
        Err(LlmError::ModelNotAvailable(model)) => assert_eq!(model, "gemini-0.1-nope"),
        other => panic!("Expected ModelNotAvailable, got {:?}", other),
    }
    // No retries
    assert_eq!(recorded.calls.lock().unwrap().len(), 1);
}
