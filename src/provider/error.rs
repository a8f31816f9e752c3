//! Error types for resource provider operations.

use crate::error::ValidationError;
use thiserror::Error;

/// Errors that can occur during resource operations.
///
/// `NotFound` carries the entity display name so the HTTP layer can render
/// the advisory text body without consulting the schema again. Storage and
/// internal failures carry only a message; they surface as opaque 500s.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("{name} not found: {collection}/{id}")]
    NotFound {
        /// Display name of the entity (e.g. "Agent")
        name: String,
        /// Collection the lookup ran against
        collection: String,
        /// The identifier that missed
        id: String,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid record data: {message}")]
    InvalidData { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ProviderError {
    /// Create a not-found error for one entity.
    pub fn not_found(
        name: impl Into<String>,
        collection: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            name: name.into(),
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Wrap a storage backend error.
    pub fn storage(error: impl std::error::Error) -> Self {
        Self::Storage {
            message: error.to_string(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
