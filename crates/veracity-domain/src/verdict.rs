//! Verdicts and their presentation class

use crate::error::ErrorKind;

/// Visual treatment chosen for a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictClass {
    /// Text starts with "true" (case-insensitive)
    Affirmative,
    /// Text starts with "false" (case-insensitive)
    Negative,
    /// Anything else, including error strings
    Neutral,
}

impl VerdictClass {
    /// Classify arbitrary text with the prefix heuristic
    ///
    /// # Examples
    ///
    /// ```
    /// use veracity_domain::VerdictClass;
    ///
    /// assert_eq!(VerdictClass::of("True. Everest is 8,849 m."), VerdictClass::Affirmative);
    /// assert_eq!(VerdictClass::of("FALSE - the Earth is an oblate spheroid"), VerdictClass::Negative);
    /// assert_eq!(VerdictClass::of("Unverifiable"), VerdictClass::Neutral);
    /// ```
    pub fn of(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if lowered.starts_with("true") {
            VerdictClass::Affirmative
        } else if lowered.starts_with("false") {
            VerdictClass::Negative
        } else {
            VerdictClass::Neutral
        }
    }

    /// Name used by the web page's panel styles
    pub fn style(&self) -> &'static str {
        match self {
            VerdictClass::Affirmative => "success",
            VerdictClass::Negative => "error",
            VerdictClass::Neutral => "info",
        }
    }
}

/// Outcome of verifying one claim
///
/// Both variants render as plain text. A failure's message is written so that
/// it reads like a verdict, which keeps the front ends free of error paths;
/// the tag is still available to callers that want it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Text produced by the model
    Judgement(String),

    /// Error converted to a human-readable message
    Failure {
        /// What went wrong
        kind: ErrorKind,
        /// Message shown in place of a verdict
        message: String,
    },
}

impl Verdict {
    /// Create a failure verdict
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Verdict::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Text displayed to the user
    pub fn text(&self) -> &str {
        match self {
            Verdict::Judgement(text) => text,
            Verdict::Failure { message, .. } => message,
        }
    }

    /// Presentation class from the prefix heuristic over [`Verdict::text`]
    pub fn class(&self) -> VerdictClass {
        VerdictClass::of(self.text())
    }

    /// Whether this verdict stands in for an error
    pub fn is_failure(&self) -> bool {
        matches!(self, Verdict::Failure { .. })
    }

    /// Error kind, if this is a failure
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Verdict::Judgement(_) => None,
            Verdict::Failure { kind, .. } => Some(*kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_is_case_insensitive() {
        assert_eq!(VerdictClass::of("tRuE"), VerdictClass::Affirmative);
        assert_eq!(VerdictClass::of("False."), VerdictClass::Negative);
        assert_eq!(VerdictClass::of(" true"), VerdictClass::Neutral);
        assert_eq!(VerdictClass::of(""), VerdictClass::Neutral);
    }

    #[test]
    fn test_failure_renders_neutral() {
        let verdict = Verdict::failure(
            ErrorKind::AgentInvocationFailure,
            "Error during fact checking: timeout",
        );
        assert!(verdict.is_failure());
        assert_eq!(verdict.class(), VerdictClass::Neutral);
        assert_eq!(verdict.error_kind(), Some(ErrorKind::AgentInvocationFailure));
    }

    #[test]
    fn test_judgement_text() {
        let verdict = Verdict::Judgement("True. It is 8,849 m tall.".to_string());
        assert_eq!(verdict.text(), "True. It is 8,849 m tall.");
        assert_eq!(verdict.class().style(), "success");
        assert!(verdict.error_kind().is_none());
    }
}
