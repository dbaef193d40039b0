//! Unified error handling for archpat core.
//!
//! This module provides a unified error type that wraps domain errors, with
//! user-actionable suggestions.

use thiserror::Error;

use crate::domain::{DomainError, ParseError};

/// Root error type for archpat core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArchpatError {
    /// Errors from the domain layer (bad input, unknown names).
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<ParseError> for ArchpatError {
    fn from(err: ParseError) -> Self {
        Self::Domain(DomainError::Parse(err))
    }
}

impl ArchpatError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
        }
    }

    /// The date parse failure, if this is one.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Domain(DomainError::Parse(e)) => Some(e),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

/// Convenient result type alias.
pub type ArchpatResult<T> = Result<T, ArchpatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_converts_to_validation() {
        let err: ArchpatError = ParseError::Empty.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.as_parse_error(), Some(&ParseError::Empty));
    }

    #[test]
    fn parse_error_message_is_transparent() {
        let inner = ParseError::InvalidDate {
            input: "31.02.2024".into(),
        };
        let err: ArchpatError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn unknown_factory_is_not_found() {
        let err: ArchpatError = DomainError::UnknownFactory { name: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.as_parse_error().is_none());
    }
}
