//! # Error Types
//!
//! Structured error types for fem_core. The two geometry errors name the
//! violated constraint, since fixing the span and fixing the load position
//! are different corrective actions.
//!
//! ## Example
//!
//! ```rust
//! use fem_core::errors::{CalcError, CalcResult};
//!
//! fn check_span(span: f64) -> CalcResult<()> {
//!     if !(span > 0.0) {
//!         return Err(CalcError::invalid_span(span));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check_span(-5.0).unwrap_err().error_code(), "INVALID_SPAN");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fem_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and case-file operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Span length is zero, negative, or not a finite number
    #[error("Invalid span: L = {span} (L must be > 0)")]
    InvalidSpan { span: f64 },

    /// Load is not strictly between the supports
    #[error("Invalid load position: a = {position} (a must satisfy 0 < a < L = {span})")]
    InvalidLoadPosition { position: f64, span: f64 },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidSpan error
    pub fn invalid_span(span: f64) -> Self {
        CalcError::InvalidSpan { span }
    }

    /// Create an InvalidLoadPosition error
    pub fn invalid_load_position(position: f64, span: f64) -> Self {
        CalcError::InvalidLoadPosition { position, span }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for the geometry validation failures raised by the calculator
    pub fn is_validation(&self) -> bool {
        matches!(self, CalcError::InvalidSpan { .. } | CalcError::InvalidLoadPosition { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidSpan { .. } => "INVALID_SPAN",
            CalcError::InvalidLoadPosition { .. } => "INVALID_LOAD_POSITION",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_load_position(7.0, 6.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidLoadPosition\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_span(0.0).error_code(), "INVALID_SPAN");
        assert_eq!(CalcError::invalid_load_position(0.0, 6.0).error_code(), "INVALID_LOAD_POSITION");
        assert_eq!(
            CalcError::file_error("open", "cases.json", "not found").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_messages_name_the_constraint() {
        let span = CalcError::invalid_span(-5.0).to_string();
        assert!(span.contains("L must be > 0"), "{}", span);

        let pos = CalcError::invalid_load_position(6.0, 6.0).to_string();
        assert!(pos.contains("0 < a < L"), "{}", pos);
    }

    #[test]
    fn test_is_validation() {
        assert!(CalcError::invalid_span(0.0).is_validation());
        assert!(CalcError::invalid_load_position(-1.0, 6.0).is_validation());
        assert!(!CalcError::SerializationError { reason: "x".into() }.is_validation());
    }
}
