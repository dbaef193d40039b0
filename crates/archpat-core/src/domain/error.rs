// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Failure to read a date in the `dd.MM.yyyy` layout.
///
/// Every variant keeps the rejected input so callers can echo it back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("date input is empty")]
    Empty,

    #[error("'{input}' has {len} characters, expected 10 (dd.MM.yyyy)")]
    Length { input: String, len: usize },

    #[error("'{input}' has '{found}' at position {position}, expected '.'")]
    Separator {
        input: String,
        position: usize,
        found: char,
    },

    #[error("'{input}' has non-digit '{found}' at position {position}")]
    NonDigit {
        input: String,
        position: usize,
        found: char,
    },

    #[error("'{input}' is not a calendar date")]
    InvalidDate { input: String },
}

impl ParseError {
    /// The input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Length { input, .. }
            | Self::Separator { input, .. }
            | Self::NonDigit { input, .. }
            | Self::InvalidDate { input } => input,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        let mut out = vec!["Dates must be written as dd.MM.yyyy, e.g. 25.12.2024".into()];
        match self {
            Self::Empty | Self::Length { .. } => {
                out.push("Pad day and month with a leading zero: 01.01.2024".into());
            }
            Self::Separator { .. } => {
                out.push("Separate day, month and year with '.'".into());
            }
            Self::NonDigit { .. } => {
                out.push("Only digits are allowed between the separators".into());
            }
            Self::InvalidDate { input } => {
                out.push(format!("'{input}' does not exist in the calendar"));
                out.push("Check the number of days in the month (and leap years)".into());
            }
        }
        out
    }
}

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("unknown factory '{name}'")]
    UnknownFactory { name: String },

    #[error("unknown capability '{name}'")]
    UnknownCapability {
        name: String,
        available: Vec<&'static str>,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Parse(e) => e.suggestions(),
            Self::UnknownFactory { name } => vec![
                format!("'{name}' is not a known factory"),
                "Known factories: a, b".into(),
            ],
            Self::UnknownCapability { name, available } => vec![
                format!("Nothing is registered under '{name}'"),
                format!("Registered capabilities: {}", available.join(", ")),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse(_) => ErrorCategory::Validation,
            Self::UnknownFactory { .. } | Self::UnknownCapability { .. } => {
                ErrorCategory::NotFound
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_keeps_input() {
        let err = ParseError::InvalidDate {
            input: "31.02.2024".into(),
        };
        assert_eq!(err.input(), "31.02.2024");
        assert!(err.to_string().contains("31.02.2024"));
    }

    #[test]
    fn parse_error_is_validation() {
        let err: DomainError = ParseError::Empty.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn unknown_capability_lists_available() {
        let err = DomainError::UnknownCapability {
            name: "db".into(),
            available: vec!["service", "client"],
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("client")));
    }

    #[test]
    fn every_parse_error_mentions_layout() {
        let errors = [
            ParseError::Empty,
            ParseError::Length {
                input: "1.1.2024".into(),
                len: 8,
            },
            ParseError::Separator {
                input: "01-01-2024".into(),
                position: 2,
                found: '-',
            },
            ParseError::NonDigit {
                input: "0a.01.2024".into(),
                position: 1,
                found: 'a',
            },
        ];
        for err in errors {
            assert!(err.suggestions()[0].contains("dd.MM.yyyy"));
        }
    }
}
