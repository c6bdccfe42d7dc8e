//! Veracity Web
//!
//! Serves the fact-checking page and its JSON API. The agent is shared by
//! all requests and constructed once, on startup when an API key is present
//! or otherwise on first use.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod page;

use config::WebConfig;
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};
use veracity_agent::initialize_agent;
use veracity_llm::credential_configured;

/// Web server error
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the web server
///
/// Builds the application state, initializes the agent when an API key is
/// available, and starts the axum server.
pub async fn start_server(config: WebConfig) -> Result<(), WebError> {
    info!("Starting Veracity web server");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {}", config.checker.gemini.model);

    let checker = config.checker.clone();
    let state = AppState::new(move || initialize_agent(&checker), credential_configured);

    if credential_configured() {
        match state.agent().await {
            Ok(_) => info!("Agent ready"),
            Err(e) => warn!("Agent failed to initialize: {}", e),
        }
    } else {
        warn!("No API key set; verification is disabled until one is provided");
    }

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Listening on http://{}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| WebError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WebError::Server("boom".to_string());
        assert_eq!(err.to_string(), "Server error: boom");
    }
}
