//! State shared by one-shot commands and the REPL.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::sync::Arc;
use tracing::debug;
use veracity_agent::{initialize_agent, AgentHolder, DefaultFactChecker};
use veracity_evidence::WikipediaClient;
use veracity_extractor::RakeExtractor;

/// Configuration, output formatting and the lazily built agent.
pub struct App {
    /// Effective configuration
    pub config: Config,
    /// Output formatter
    pub formatter: Formatter,
    agent: AgentHolder<DefaultFactChecker>,
}

impl App {
    /// Create the application state; nothing is built yet.
    pub fn new(config: Config, formatter: Formatter) -> Self {
        Self {
            config,
            formatter,
            agent: AgentHolder::new(),
        }
    }

    /// The fact checker, built on first use and reused afterwards.
    pub async fn agent(&self) -> Result<Arc<DefaultFactChecker>> {
        if !veracity_llm::credential_configured() {
            return Err(CliError::MissingCredential);
        }
        let agent = self
            .agent
            .get_or_create(|| initialize_agent(&self.config.checker))
            .await?;
        debug!(
            "Agent ready after {} construction attempt(s)",
            self.agent.construction_attempts()
        );
        Ok(agent)
    }

    /// Topic extractor from the configured settings.
    pub fn extractor(&self) -> Result<RakeExtractor> {
        RakeExtractor::new(self.config.checker.extractor.clone())
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Wikipedia client from the configured settings.
    pub fn wikipedia(&self) -> Result<WikipediaClient> {
        Ok(WikipediaClient::new(self.config.checker.wikipedia.clone())?)
    }
}
