//! Veracity Evidence Fetcher
//!
//! Looks up reference material for a claim's topics on Wikipedia through the
//! MediaWiki Action API. At most one document is returned per lookup.
//!
//! # Example
//!
//! ```no_run
//! use veracity_domain::TopicList;
//! use veracity_evidence::{WikipediaClient, WikipediaConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), veracity_evidence::RetrievalError> {
//! let client = WikipediaClient::new(WikipediaConfig::default())?;
//! let topics = TopicList::from_ranked(["mount everest".to_string()]);
//! for doc in client.fetch(&topics).await? {
//!     println!("{} ({})", doc.title, doc.source);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod wikipedia;

pub use config::WikipediaConfig;
pub use error::RetrievalError;
pub use wikipedia::WikipediaClient;
