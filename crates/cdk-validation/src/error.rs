//! Configuration error types
//!
//! Validation failures are plain data (`Vec<String>`). The errors here are
//! raised only when a validator itself is invoked incorrectly.

use thiserror::Error;

/// Outcome of a single validator call: the ordered error messages, or a
/// configuration error when the call site is malformed.
pub type ValidationResult = Result<Vec<String>, ConfigurationError>;

/// Malformed validator invocation
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Both bounds were supplied and `min` is greater than `max`
    #[error("min must be less than max")]
    InvertedBounds { min: String, max: String },

    /// The pattern source failed to compile
    #[error("invalid pattern /{pattern}/: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A pattern flag outside of `gimsux`
    #[error("unsupported pattern flag '{flag}'")]
    UnsupportedFlag { flag: char },

    /// A pattern flag given more than once
    #[error("repeated pattern flag '{flag}'")]
    DuplicateFlag { flag: char },

    /// A pattern literal that is not of the form `/source/flags`
    #[error("malformed pattern literal: {literal}")]
    MalformedLiteral { literal: String },
}

impl ConfigurationError {
    /// Create an inverted bounds error from the offending bounds
    pub fn inverted_bounds(min: impl ToString, max: impl ToString) -> Self {
        Self::InvertedBounds {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Whether this error came from an inverted `min`/`max` pair
    pub fn is_inverted_bounds(&self) -> bool {
        matches!(self, Self::InvertedBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_bounds_message() {
        let error = ConfigurationError::inverted_bounds(4, 3);
        assert_eq!(error.to_string(), "min must be less than max");
        assert!(error.is_inverted_bounds());

        match error {
            ConfigurationError::InvertedBounds { min, max } => {
                assert_eq!(min, "4");
                assert_eq!(max, "3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_flag_and_literal_messages() {
        let error = ConfigurationError::UnsupportedFlag { flag: 'q' };
        assert_eq!(error.to_string(), "unsupported pattern flag 'q'");
        assert!(!error.is_inverted_bounds());

        let error = ConfigurationError::DuplicateFlag { flag: 'i' };
        assert_eq!(error.to_string(), "repeated pattern flag 'i'");

        let error = ConfigurationError::MalformedLiteral {
            literal: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "malformed pattern literal: abc");
    }
}
