//! MediaWiki Action API client

use crate::config::WikipediaConfig;
use crate::error::RetrievalError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};
use veracity_domain::traits::EvidenceSource;
use veracity_domain::{EvidenceDocument, TopicList};

/// Search results requested per lookup; only the best hit is loaded
const SEARCH_LIMIT: &str = "1";

/// Wikipedia evidence fetcher
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    config: WikipediaConfig,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ApiResponse<Q> {
    query: Option<Q>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    missing: bool,
    extract: Option<String>,
    fullurl: Option<String>,
}

impl WikipediaClient {
    /// Create a new client
    ///
    /// # Errors
    /// Returns [`RetrievalError::Config`] for invalid settings
    pub fn new(config: WikipediaConfig) -> Result<Self, RetrievalError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| RetrievalError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Get the active configuration
    pub fn config(&self) -> &WikipediaConfig {
        &self.config
    }

    /// Find and load the best-matching article for the topics
    ///
    /// Topics are joined into a single search query. No hit yields an empty
    /// vector.
    pub async fn fetch(&self, topics: &TopicList) -> Result<Vec<EvidenceDocument>, RetrievalError> {
        if topics.is_empty() {
            return Err(RetrievalError::EmptyQuery);
        }
        let query = topics.to_query();

        let Some(title) = self.search(&query).await? else {
            info!("No Wikipedia article matches '{}'", query);
            return Ok(Vec::new());
        };

        match self.load_page(&title).await? {
            Some(doc) => {
                info!("Loaded '{}' ({} chars)", doc.title, doc.content.chars().count());
                Ok(vec![doc])
            }
            None => {
                info!("Article '{}' has no usable content", title);
                Ok(Vec::new())
            }
        }
    }

    /// Title of the top search hit
    async fn search(&self, query: &str) -> Result<Option<String>, RetrievalError> {
        debug!("Searching Wikipedia for '{}'", query);

        let result: SearchQuery = self
            .get(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", SEARCH_LIMIT),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .await?;

        Ok(result.search.into_iter().next().map(|hit| hit.title))
    }

    /// Plain-text extract and URL of a page
    async fn load_page(&self, title: &str) -> Result<Option<EvidenceDocument>, RetrievalError> {
        debug!("Loading Wikipedia page '{}'", title);

        let result: PageQuery = self
            .get(&[
                ("action", "query"),
                ("prop", "extracts|info"),
                ("inprop", "url"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .await?;

        let Some(page) = result.pages.into_iter().find(|p| !p.missing) else {
            return Ok(None);
        };
        let content = page.extract.unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(None);
        }

        let source = page.fullurl.unwrap_or_else(|| page.title.clone());
        let content = truncate_chars(content.trim(), self.config.max_document_chars);
        Ok(Some(EvidenceDocument::new(page.title, source, content)))
    }

    async fn get<Q: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<Q, RetrievalError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let body: ApiResponse<Q> = response.json().await?;
        if let Some(error) = body.error {
            return Err(RetrievalError::Api {
                code: error.code,
                info: error.info,
            });
        }
        body.query
            .ok_or_else(|| RetrievalError::Decode("response has no 'query' object".to_string()))
    }
}

impl EvidenceSource for WikipediaClient {
    type Error = RetrievalError;

    fn fetch_evidence(
        &self,
        topics: &TopicList,
    ) -> impl Future<Output = Result<Vec<EvidenceDocument>, Self::Error>> + Send {
        self.fetch(topics)
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
