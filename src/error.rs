//! Custom error types for breakeven-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for breakeven-cli operations
#[derive(Error, Debug)]
pub enum BreakevenError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A cost category label matched no entry in the closed taxonomy
    #[error("Unknown cost category: {0}")]
    InvalidCategory(String),

    /// A manual cost entry had fewer than four colon-delimited fields
    #[error("Malformed cost entry '{entry}': expected vendor:type:name:amount[:notes]")]
    MalformedEntry { entry: String },

    /// A numeric field could not be parsed as an exact decimal
    #[error("Malformed amount '{value}' in {context}")]
    MalformedAmount { value: String, context: String },

    /// A source document could not be read or decoded
    #[error("Failed to extract costs from {source_path}: {reason}")]
    Extraction { source_path: String, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Web server errors
    #[error("Web error: {0}")]
    Web(String),
}

impl BreakevenError {
    /// Create an extraction failure scoped to one source document
    pub fn extraction(source_path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Extraction {
            source_path: source_path.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed-amount error with parsing context
    pub fn malformed_amount(value: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MalformedAmount {
            value: value.into(),
            context: context.into(),
        }
    }

    /// Check if this is an extraction failure
    pub fn is_extraction(&self) -> bool {
        matches!(self, Self::Extraction { .. })
    }

    /// Check if this is an input parsing error (category, entry, or amount)
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidCategory(_) | Self::MalformedEntry { .. } | Self::MalformedAmount { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BreakevenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BreakevenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for breakeven-cli operations
pub type BreakevenResult<T> = Result<T, BreakevenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BreakevenError::InvalidCategory("weekly".into());
        assert_eq!(err.to_string(), "Unknown cost category: weekly");
    }

    #[test]
    fn test_malformed_entry_display() {
        let err = BreakevenError::MalformedEntry {
            entry: "Acme:setup".into(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed cost entry 'Acme:setup': expected vendor:type:name:amount[:notes]"
        );
    }

    #[test]
    fn test_extraction_error() {
        let err = BreakevenError::extraction("vendor.pdf", "file not found");
        assert!(err.is_extraction());
        assert_eq!(
            err.to_string(),
            "Failed to extract costs from vendor.pdf: file not found"
        );
    }

    #[test]
    fn test_is_input() {
        assert!(BreakevenError::InvalidCategory("x".into()).is_input());
        assert!(BreakevenError::malformed_amount("abc", "manual entry").is_input());
        assert!(!BreakevenError::Io("oops".into()).is_input());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BreakevenError = io_err.into();
        assert!(matches!(err, BreakevenError::Io(_)));
    }
}
