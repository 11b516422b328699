//! Custom error types for VerziBiz
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for VerziBiz operations
#[derive(Error, Debug)]
pub enum VerziError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for form input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Ledger import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Transport-level HTTP failures
    #[error("HTTP error: {0}")]
    Http(String),

    /// Chat completion errors
    #[error("Chat error: {0}")]
    Chat(String),

    /// Feedback submission errors
    #[error("Feedback error: {0}")]
    Feedback(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl VerziError {
    /// Create a "not found" error for ledger entries
    pub fn entry_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Ledger entry",
            identifier: format!("#{}", index + 1),
        }
    }

    /// Create a "not found" error for weekday slots
    pub fn weekday_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Weekday",
            identifier: index.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for VerziError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VerziError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for VerziError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<csv::Error> for VerziError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for VerziBiz operations
pub type VerziResult<T> = Result<T, VerziError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VerziError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_entry_not_found_is_one_based() {
        let err = VerziError::entry_not_found(0);
        assert_eq!(err.to_string(), "Ledger entry not found: #1");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_weekday_not_found() {
        let err = VerziError::weekday_not_found(9);
        assert_eq!(err.to_string(), "Weekday not found: 9");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let verzi_err: VerziError = io_err.into();
        assert!(matches!(verzi_err, VerziError::Io(_)));
    }
}
