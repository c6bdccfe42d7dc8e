//! HTTP request handlers for the fact-checking page.
//!
//! Serves the page, the verification endpoint and a health check using axum.

use crate::error::AppError;
use crate::page::{self, AgentStatus};
use axum::{
    extract::State,
    response::{Html, Json},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use veracity_agent::{AgentError, AgentHolder, ClaimVerifier};
use veracity_domain::Claim;

/// Builds the agent on first use
pub type AgentFactory<V> = Arc<dyn Fn() -> Result<V, AgentError> + Send + Sync>;

/// Shared application state
pub struct AppState<V> {
    /// Process-wide agent
    pub holder: Arc<AgentHolder<V>>,
    /// Agent constructor
    pub factory: AgentFactory<V>,
    /// Whether an API key is available, checked per request
    pub credential_check: fn() -> bool,
}

impl<V> Clone for AppState<V> {
    fn clone(&self) -> Self {
        Self {
            holder: self.holder.clone(),
            factory: self.factory.clone(),
            credential_check: self.credential_check,
        }
    }
}

impl<V> AppState<V> {
    /// Create state with an empty holder
    pub fn new<F>(factory: F, credential_check: fn() -> bool) -> Self
    where
        F: Fn() -> Result<V, AgentError> + Send + Sync + 'static,
    {
        Self {
            holder: Arc::new(AgentHolder::new()),
            factory: Arc::new(factory),
            credential_check,
        }
    }

    /// Get the agent, constructing it on first use
    pub async fn agent(&self) -> Result<Arc<V>, AgentError> {
        self.holder.get_or_create(|| (self.factory)()).await
    }

    fn credential_configured(&self) -> bool {
        (self.credential_check)()
    }
}

/// Verification request
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// Claim to verify
    #[serde(default)]
    pub claim: String,
}

/// Verification result
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Normalized claim text
    pub claim: String,
    /// Verdict text (or an error message in its place)
    pub verdict: String,
    /// Panel style: "success", "error" or "info"
    pub style: String,
    /// Whether the verdict stands in for an error
    pub failed: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Whether an API key is available
    pub credential_configured: bool,
    /// Whether the agent has been constructed
    pub agent_ready: bool,
}

/// GET / - The fact-checking page
///
/// Constructs the agent on first load so the page can report its state.
async fn index<V>(State(state): State<AppState<V>>) -> Html<String>
where
    V: ClaimVerifier + Send + Sync + 'static,
{
    let status = if !state.credential_configured() {
        AgentStatus::MissingCredential
    } else {
        match state.agent().await {
            Ok(_) => AgentStatus::Ready,
            Err(e) => {
                error!("Error initializing agent: {}", e);
                AgentStatus::Failed
            }
        }
    };

    Html(page::render(status))
}

/// POST /api/verify - Verify a claim
async fn verify_claim<V>(
    State(state): State<AppState<V>>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AppError>
where
    V: ClaimVerifier + Send + Sync + 'static,
{
    let claim = Claim::parse(&request.claim).map_err(|_| AppError::EmptyClaim)?;

    if !state.credential_configured() {
        return Err(AppError::MissingCredential);
    }

    let agent = state
        .agent()
        .await
        .map_err(|e| AppError::AgentUnavailable(e.to_string()))?;

    info!("Verifying claim {}", claim.id());
    let verdict = agent.verify(claim.text()).await;

    Ok(Json(VerifyResponse {
        claim: claim.text().to_string(),
        verdict: verdict.text().to_string(),
        style: verdict.class().style().to_string(),
        failed: verdict.is_failure(),
    }))
}

/// GET /health - Health check
async fn health_check<V>(State(state): State<AppState<V>>) -> Json<HealthCheckResponse>
where
    V: ClaimVerifier + Send + Sync + 'static,
{
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        credential_configured: state.credential_configured(),
        agent_ready: state.holder.is_ready(),
    })
}

/// Create the axum router with all routes
pub fn create_router<V>(state: AppState<V>) -> AxumRouter
where
    V: ClaimVerifier + Send + Sync + 'static,
{
    AxumRouter::new()
        .route("/", get(index::<V>))
        .route("/api/verify", post(verify_claim::<V>))
        .route("/health", get(health_check::<V>))
        .with_state(state)
}
