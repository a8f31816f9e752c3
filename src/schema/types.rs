//! Core schema type definitions for mutuelle records.
//!
//! These structures describe the shape of one record collection: which
//! attributes exist, what type each carries, and whether it must be present
//! on create. They deserialize directly from the embedded schema JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema for one resource collection.
///
/// The `collection` field is the URL path segment and store collection name
/// (e.g. `"agents"`); `name` is the human-facing entity name used in
/// advisory error texts (e.g. `"Agent"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Collection name, as it appears in paths and in the store
    pub collection: String,
    /// Human-readable entity name
    pub name: String,
    /// Schema description
    pub description: String,
    /// List of attribute definitions
    pub attributes: Vec<AttributeDefinition>,
    /// Example record, carried for documentation purposes
    #[serde(default)]
    pub example: Option<Value>,
}

impl Schema {
    /// Look up an attribute definition by name.
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

/// Definition of a single record attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Attribute name
    pub name: String,
    /// Data type of the attribute
    #[serde(rename = "type")]
    pub data_type: AttributeType,
    /// Whether this attribute must be present on create
    pub required: bool,
}

impl Default for AttributeDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            data_type: AttributeType::String,
            required: false,
        }
    }
}

/// Attribute data types.
///
/// The embedded mutuelle schemas use only `String`, `Integer` and `Decimal`;
/// the remaining types are supported so schemas stay descriptive rather than
/// hardcoded to the current four collections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AttributeType {
    /// String value
    String,
    /// Integer number
    Integer,
    /// Decimal number (integers accepted)
    Decimal,
    /// Boolean value
    Boolean,
    /// DateTime in RFC 3339 format
    DateTime,
}

impl Default for AttributeType {
    fn default() -> Self {
        Self::String
    }
}

impl AttributeType {
    /// Name of the type as used in validation error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::DateTime => "dateTime",
        }
    }
}
