//! Evidence documents retrieved from the knowledge source

/// A single reference document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceDocument {
    /// Article title (source identifier)
    pub title: String,

    /// Canonical URL of the article
    pub source: String,

    /// Plain-text content, possibly truncated
    pub content: String,
}

impl EvidenceDocument {
    /// Create a new evidence document
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            content: content.into(),
        }
    }
}
