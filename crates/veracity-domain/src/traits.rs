//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{EvidenceDocument, TopicList};
use std::future::Future;

/// Trait for deriving topic phrases from free text
///
/// Implemented by the extraction layer (veracity-extractor)
pub trait TopicExtractor {
    /// Extract at most three ranked topics; may return an empty list
    fn extract_topics(&self, text: &str) -> TopicList;
}

/// Trait for retrieving reference documents
///
/// Implemented by the infrastructure layer (veracity-evidence)
pub trait EvidenceSource {
    /// Error type for retrieval operations
    type Error;

    /// Fetch at most one document for the given topics
    ///
    /// "Not found" is an empty vector, never an error; errors are reserved
    /// for transport and decoding failures.
    fn fetch_evidence(
        &self,
        topics: &TopicList,
    ) -> impl Future<Output = Result<Vec<EvidenceDocument>, Self::Error>> + Send;
}
