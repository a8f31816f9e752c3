//! Error types for record validation.
//!
//! Validation errors are the only failures a client can repair, so each
//! variant carries the attribute it concerns. The HTTP layer renders every
//! variant as one entry of the structured 422 body.

/// Validation errors for schema compliance checking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required attribute is missing from a create body
    #[error("Required attribute '{attribute}' is missing")]
    MissingRequiredAttribute { attribute: String },

    /// Attribute value doesn't match the schema type
    #[error("Attribute '{attribute}' has invalid type, expected {expected}, got {actual}")]
    InvalidAttributeType {
        attribute: String,
        expected: String,
        actual: String,
    },

    /// Attribute not declared by the collection schema
    #[error("Unknown attribute '{attribute}' for schema '{schema}'")]
    UnknownAttribute { attribute: String, schema: String },

    /// DateTime attribute that is not RFC 3339
    #[error("Attribute '{attribute}' has invalid datetime format: {value}")]
    InvalidDateTimeFormat { attribute: String, value: String },

    /// Body was not a JSON object
    #[error("Validation failed: {message}")]
    Custom { message: String },
}

impl ValidationError {
    /// Create a missing required attribute error
    pub fn missing_required(attribute: impl Into<String>) -> Self {
        Self::MissingRequiredAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(
        attribute: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidAttributeType {
            attribute: attribute.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a custom validation error
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    /// The attribute this error concerns, if any.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredAttribute { attribute }
            | Self::InvalidAttributeType { attribute, .. }
            | Self::UnknownAttribute { attribute, .. }
            | Self::InvalidDateTimeFormat { attribute, .. } => Some(attribute),
            Self::Custom { .. } => None,
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
