//! Claim module - the user-supplied assertion under test

use std::fmt;

/// Unique identifier for a claim based on UUIDv7
///
/// Claims are never stored; the identifier only ties together the log lines
/// emitted while one claim moves through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClaimId(u128);

impl ClaimId {
    /// Generate a new UUIDv7-based ClaimId
    ///
    /// # Examples
    ///
    /// ```
    /// use veracity_domain::ClaimId;
    ///
    /// let id = ClaimId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Reasons a raw string is not accepted as a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimError {
    /// Input was empty or whitespace only
    Empty,
}

impl fmt::Display for ClaimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimError::Empty => write!(f, "Claim cannot be empty"),
        }
    }
}

impl std::error::Error for ClaimError {}

/// A claim to be fact-checked
///
/// Immutable once created. The stored text is the trimmed input, so a
/// `Claim` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    id: ClaimId,
    text: String,
}

impl Claim {
    /// Parse user input into a claim
    ///
    /// # Errors
    /// Returns [`ClaimError::Empty`] if the input is blank after trimming
    ///
    /// # Examples
    ///
    /// ```
    /// use veracity_domain::{Claim, ClaimError};
    ///
    /// let claim = Claim::parse("  Earth is flat.  ").unwrap();
    /// assert_eq!(claim.text(), "Earth is flat.");
    /// assert_eq!(Claim::parse("   "), Err(ClaimError::Empty));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ClaimError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ClaimError::Empty);
        }
        Ok(Self {
            id: ClaimId::new(),
            text: text.to_string(),
        })
    }

    /// Identifier used for log correlation
    pub fn id(&self) -> ClaimId {
        self.id
    }

    /// The trimmed claim text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
