//! Veracity Extractor
//!
//! Derives topic phrases from a claim with RAKE (rapid automatic keyword
//! extraction).
//!
//! # Overview
//!
//! The claim is tokenized, split into candidate phrases at stop-words and
//! punctuation, and every phrase is scored by the degree/frequency ratio of
//! its words in the word co-occurrence graph. The best three phrases become
//! the topics used to query the knowledge source.
//!
//! # Architecture
//!
//! ```text
//! Claim → tokenize → candidate phrases → co-occurrence scores → TopicList
//! ```
//!
//! # Example Usage
//!
//! ```
//! use veracity_extractor::{ExtractorConfig, RakeExtractor};
//! use veracity_domain::traits::TopicExtractor;
//!
//! let extractor = RakeExtractor::new(ExtractorConfig::default()).unwrap();
//! let topics = extractor.extract_topics("Mount Everest is the tallest mountain");
//!
//! assert!(topics.as_slice().contains(&"mount everest".to_string()));
//! assert!(topics.len() <= 3);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod rake;
mod stopwords;
mod tokenize;
mod types;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use rake::RakeExtractor;
pub use stopwords::ENGLISH_STOPWORDS;
pub use types::RankedPhrase;
