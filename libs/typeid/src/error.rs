//! Error types for typed ID construction and parsing.

use thiserror::Error;

/// Errors that can occur when making or parsing typed IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeIdError {
    /// The type name does not match the type name grammar.
    #[error("invalid type name '{type_name}': {reason}")]
    InvalidTypeName {
        type_name: String,
        reason: &'static str,
    },

    /// The candidate has no underscore separating type name and ULID.
    #[error("malformed typed ID '{candidate}': missing underscore separating type name and ULID")]
    MalformedIdentifier { candidate: String },

    /// The type name prefix of the candidate is not the expected one.
    #[error("typed ID prefix '{actual}' does not match expected type name '{expected}'")]
    TypeMismatch { expected: String, actual: String },

    /// The ULID portion of the candidate is invalid.
    #[error("invalid ULID '{id}': {reason}")]
    InvalidSortableId { id: String, reason: String },

    /// A monotonic generator ran out of random bits within one millisecond.
    #[error("monotonic ULID generator overflowed within the current millisecond")]
    MonotonicOverflow,
}

impl TypeIdError {
    /// Returns true if this error was caused by the type name itself.
    pub fn is_type_name_error(&self) -> bool {
        matches!(self, TypeIdError::InvalidTypeName { .. })
    }

    /// Returns true if this error indicates a type name mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, TypeIdError::TypeMismatch { .. })
    }

    /// Returns true if the candidate string had the wrong shape or ULID.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            TypeIdError::MalformedIdentifier { .. } | TypeIdError::InvalidSortableId { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offending_input() {
        let err = TypeIdError::TypeMismatch {
            expected: "user".to_string(),
            actual: "admin".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'admin'"));
        assert!(msg.contains("'user'"));

        let err = TypeIdError::MalformedIdentifier {
            candidate: "useronly".to_string(),
        };
        assert!(err.to_string().contains("useronly"));
    }

    #[test]
    fn test_predicates() {
        let err = TypeIdError::InvalidTypeName {
            type_name: String::new(),
            reason: "type name must not be empty",
        };
        assert!(err.is_type_name_error());
        assert!(!err.is_mismatch());
        assert!(!err.is_format_error());

        let err = TypeIdError::InvalidSortableId {
            id: "nope".to_string(),
            reason: "invalid length".to_string(),
        };
        assert!(err.is_format_error());
        assert!(!TypeIdError::MonotonicOverflow.is_format_error());
    }

    #[test]
    fn test_monotonic_overflow() {
        let err = TypeIdError::MonotonicOverflow;
        assert!(err.to_string().contains("overflowed"));
        assert!(!err.is_type_name_error());
        assert!(!err.is_mismatch());
        assert!(!err.is_format_error());
    }
}
