//! # Error Types
//!
//! Structured error types for estimate_core. Recoverable input conditions
//! (non-numeric heights, zero coverage rates, OCR noise) are deliberately
//! NOT errors — they degrade to 0.0 or to a sentinel result per the
//! best-effort input policy. The variants here cover the conditions that
//! genuinely fail an operation: a broken OCR collaborator, a malformed
//! session file, or an input a caller explicitly chose to validate.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::errors::{EstimateError, EstimateResult};
//!
//! fn validate_coverage(rate: f64) -> EstimateResult<()> {
//!     if rate <= 0.0 {
//!         return Err(EstimateError::invalid_input(
//!             "coverage_rate",
//!             rate.to_string(),
//!             "Coverage rate must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for estimate_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by the presentation layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The external image-to-text service failed (unreadable image,
    /// service unavailable). Non-fatal: no partial state is committed.
    #[error("Text recognition failed: {reason}")]
    OcrFailed { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OcrFailed error
    pub fn ocr_failed(reason: impl Into<String>) -> Self {
        EstimateError::OcrFailed {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::OcrFailed { .. } => "OCR_FAILED",
            EstimateError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for EstimateError {
    fn from(err: serde_json::Error) -> Self {
        EstimateError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EstimateError::invalid_input("height", "-2.5", "Height cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EstimateError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EstimateError::ocr_failed("tesseract exited 1").error_code(),
            "OCR_FAILED"
        );
        assert_eq!(
            EstimateError::invalid_input("f", "v", "r").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let converted: EstimateError = err.into();
        assert_eq!(converted.error_code(), "SERIALIZATION_ERROR");
    }
}
