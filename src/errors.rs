//! Error types for type checking.
//!
//! Two kinds of failure exist:
//! - `InvalidDescriptor`: the descriptor argument itself is malformed
//! - `TypeMismatch`: the value matched none of the declared types
//!
//! Both are surfaced synchronously to the caller; nothing is retried or
//! recovered internally.

use thiserror::Error;

use crate::classify::TypeName;

/// Result type for check operations
pub type CheckResult<T> = Result<T, CheckError>;

/// Type-checking errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The descriptor was neither a string nor an array of strings.
    #[error("Must provide a string or an array for \"type\"")]
    InvalidDescriptor,

    /// The value's classified type matched none of the declared types.
    ///
    /// `given` is the classified type name of the offending value. An
    /// alternation failure carries no classified name and renders the
    /// placeholder as the literal text `undefined`.
    #[error("Unexpected value of type \"{}\" (expected {expected})", .given.unwrap_or("undefined"))]
    TypeMismatch {
        /// Expected type text: a type name, `name?`, or `any of: a, b`.
        expected: String,
        /// Classified type name of the value, if included in the message.
        given: Option<TypeName>,
    },
}

impl CheckError {
    /// Single-entry mismatch against a known value classification.
    pub fn mismatch(expected: impl Into<String>, given: TypeName) -> Self {
        CheckError::TypeMismatch {
            expected: expected.into(),
            given: Some(given),
        }
    }

    /// Alternation failure: every candidate entry was exhausted.
    pub fn no_match(expected: impl Into<String>) -> Self {
        CheckError::TypeMismatch {
            expected: expected.into(),
            given: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_descriptor_message() {
        assert_eq!(
            CheckError::InvalidDescriptor.to_string(),
            "Must provide a string or an array for \"type\""
        );
    }

    #[test]
    fn test_mismatch_message() {
        let err = CheckError::mismatch("string", "number");
        assert_eq!(
            err.to_string(),
            "Unexpected value of type \"number\" (expected string)"
        );
    }

    #[test]
    fn test_optional_mismatch_message() {
        let err = CheckError::mismatch("string?", "boolean");
        assert_eq!(
            err.to_string(),
            "Unexpected value of type \"boolean\" (expected string?)"
        );
    }

    #[test]
    fn test_no_match_renders_literal_undefined() {
        let err = CheckError::no_match("any of: string, number");
        assert_eq!(
            err.to_string(),
            "Unexpected value of type \"undefined\" (expected any of: string, number)"
        );
    }
}
