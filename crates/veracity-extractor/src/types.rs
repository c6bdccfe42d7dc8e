//! Result types for extraction

use serde::Serialize;

/// A candidate phrase and its RAKE score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPhrase {
    /// Lowercased phrase text
    pub phrase: String,

    /// Sum of the degree/frequency ratios of its words
    pub score: f64,
}
