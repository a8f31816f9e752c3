//! Storage-specific error types for pure data operations.
//!
//! These errors represent failures in the storage layer only. They carry no
//! HTTP semantics; the provider maps every one of them to an internal error
//! and the current request fails with a 500.

use thiserror::Error;

/// Errors that can occur during document-store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Document structure that cannot be stored (e.g. not a JSON object).
    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },

    /// Backend temporarily unreachable.
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },

    /// Serialization or deserialization failure inside the backend.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal storage error.
    #[error("Internal storage error: {message}")]
    Internal { message: String },
}

impl StorageError {
    /// Create an invalid document error.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Create an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = StorageError::invalid_document("document must be a JSON object");
        assert!(error.to_string().contains("Invalid document"));

        let error = StorageError::unavailable("connection refused");
        assert!(error.to_string().contains("connection refused"));
    }
}
