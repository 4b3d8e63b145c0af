//! Custom error types for the audit ledger
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for audit ledger operations
#[derive(Error, Debug)]
pub enum AuditError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed query filter input (e.g. an unparseable timestamp)
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl AuditError {
    /// Create an invalid-filter error for a timestamp that failed to parse
    pub fn bad_timestamp(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFilter(format!(
            "{} is not a recognized timestamp (expected RFC 3339 or YYYY-MM-DD): {}",
            field,
            value.into()
        ))
    }

    /// Check if this is an invalid-filter error
    pub fn is_invalid_filter(&self) -> bool {
        matches!(self, Self::InvalidFilter(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for audit ledger operations
pub type AuditResult<T> = Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuditError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_bad_timestamp_error() {
        let err = AuditError::bad_timestamp("startDate", "not-a-date");
        assert!(err.is_invalid_filter());
        assert!(err.to_string().contains("startDate"));
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let audit_err: AuditError = io_err.into();
        assert!(matches!(audit_err, AuditError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let audit_err: AuditError = json_err.into();
        assert!(matches!(audit_err, AuditError::Json(_)));
    }
}
