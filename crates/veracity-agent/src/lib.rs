//! Veracity Verification Agent
//!
//! A language model with one retrieval tool. Given a claim, the model may
//! ask for reference material (topics are extracted from the claim and a
//! Wikipedia article is fetched for them) and then answers through a
//! structured-output tool with a single `fact_check_response` field.
//!
//! # Example
//!
//! ```no_run
//! use veracity_agent::{initialize_agent, AgentHolder, CheckerConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), veracity_agent::AgentError> {
//! let config = CheckerConfig::default();
//! let holder = AgentHolder::new();
//! let agent = holder.get_or_create(|| initialize_agent(&config)).await?;
//!
//! let verdict = agent.verify("Mount Everest is the tallest mountain").await;
//! println!("{}", verdict.text());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod checker;
pub mod config;
pub mod error;
pub mod holder;
pub mod parser;
pub mod prompt;
pub mod tools;

use std::future::Future;
use tracing::info;
use veracity_domain::Verdict;
use veracity_evidence::WikipediaClient;
use veracity_extractor::RakeExtractor;
use veracity_llm::GeminiProvider;

pub use checker::{FactChecker, ERROR_PREFIX};
pub use config::{AgentConfig, CheckerConfig, ConfigError};
pub use error::{AgentError, ToolError};
pub use holder::AgentHolder;
pub use tools::{InformationRetrievalTool, RESPONSE_TOOL, RETRIEVAL_TOOL};

/// Fact checker wired to Gemini, RAKE and Wikipedia
pub type DefaultFactChecker = FactChecker<GeminiProvider, RakeExtractor, WikipediaClient>;

/// Anything that turns a claim into a verdict
///
/// Front ends depend on this rather than on a concrete agent.
pub trait ClaimVerifier {
    /// Verify a claim; failures are folded into the verdict
    fn verify(&self, claim: &str) -> impl Future<Output = Verdict> + Send;
}

impl<L, E, S> ClaimVerifier for FactChecker<L, E, S>
where
    L: veracity_llm::LlmProvider + Sync,
    E: veracity_domain::traits::TopicExtractor + Sync,
    S: veracity_domain::traits::EvidenceSource + Sync,
    S::Error: std::fmt::Display,
{
    fn verify(&self, claim: &str) -> impl Future<Output = Verdict> + Send {
        FactChecker::verify(self, claim)
    }
}

/// Build the default fact checker
///
/// Reads the API key from the environment.
///
/// # Errors
///
/// Returns [`AgentError::Llm`] wrapping `MissingCredential` when no key is
/// set, and [`AgentError::Config`] for invalid settings.
pub fn initialize_agent(config: &CheckerConfig) -> Result<DefaultFactChecker, AgentError> {
    config
        .validate()
        .map_err(|e| AgentError::Config(e.to_string()))?;

    let llm = GeminiProvider::from_env(config.gemini.clone())?;
    let extractor = RakeExtractor::new(config.extractor.clone())
        .map_err(|e| AgentError::Config(e.to_string()))?;
    let source = WikipediaClient::new(config.wikipedia.clone())
        .map_err(|e| AgentError::Config(e.to_string()))?;

    info!("Agent initialized with model {}", config.gemini.model);
    Ok(FactChecker::new(llm, extractor, source, config.agent.clone()))
}
