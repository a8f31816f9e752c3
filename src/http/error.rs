//! HTTP error mapping.
//!
//! Three failure shapes leave this API: an advisory 404 text body, a
//! structured 422 validation body, and an opaque 500. Provider errors fold
//! into these; nothing else is surfaced to clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;

use crate::error::ValidationError;
use crate::provider::ProviderError;

/// Client-facing error for the HTTP surface.
#[derive(Debug)]
pub enum ApiError {
    /// Known collection, missing record: 404 with `"{Name} not found"`.
    NotFound { message: String },
    /// Path segment that names no collection: plain 404.
    UnknownResource,
    /// Schema violation: structured 422.
    Validation(ValidationError),
    /// Anything else, storage connectivity included: opaque 500.
    Internal,
}

impl From<ProviderError> for ApiError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::NotFound { name, .. } => Self::NotFound {
                message: format!("{name} not found"),
            },
            ProviderError::Validation(validation) => Self::Validation(validation),
            ProviderError::InvalidData { message }
            | ProviderError::Storage { message }
            | ProviderError::Internal { message } => {
                error!("Request failed: {message}");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { message } => (StatusCode::NOT_FOUND, message).into_response(),
            Self::UnknownResource => {
                (StatusCode::NOT_FOUND, "Not Found".to_string()).into_response()
            }
            Self::Validation(validation) => {
                let detail = json!({
                    "detail": [{
                        "loc": ["body", validation.attribute()],
                        "msg": validation.to_string(),
                        "type": "validation_error"
                    }]
                });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(detail)).into_response()
            }
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
