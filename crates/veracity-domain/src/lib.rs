//! Veracity Domain Layer
//!
//! This crate contains the value types and trait interfaces of the
//! fact-checking pipeline. Apart from `uuid` for claim identifiers it has no
//! external dependencies; infrastructure lives in the other crates.
//!
//! ## Key Concepts
//!
//! - **Claim**: A user-supplied assertion, non-empty after trimming
//! - **TopicList**: At most three ranked topic phrases derived from a claim
//! - **EvidenceDocument**: Reference text retrieved for the topics
//! - **Verdict**: The judgement returned to the user, or a failure standing in for one
//!
//! ## Pipeline
//!
//! ```text
//! Claim → TopicExtractor → EvidenceSource → verification agent → Verdict
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod error;
pub mod evidence;
pub mod topic;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use claim::{Claim, ClaimError, ClaimId};
pub use error::ErrorKind;
pub use evidence::EvidenceDocument;
pub use topic::{TopicList, MAX_TOPICS};
pub use verdict::{Verdict, VerdictClass};
