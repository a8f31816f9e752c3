//! Schema registry for loading and accessing collection schemas.

use super::{embedded, types::Schema};

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use std::collections::HashMap;

/// Registry of collection schemas with validation capabilities.
///
/// Holds one schema per resource collection, keyed by the collection name
/// that appears in request paths and in the document store.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    /// Create a registry with the embedded mutuelle schemas.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_embedded_schemas()
    }

    /// Create a registry with the embedded mutuelle schemas.
    ///
    /// Uses the schemas compiled into the library, so no external files are
    /// required.
    pub fn with_embedded_schemas() -> Result<Self, Box<dyn std::error::Error>> {
        let mut schemas = HashMap::new();
        for content in embedded::all_schemas() {
            let schema = Self::load_schema_from_str(content)?;
            schemas.insert(schema.collection.clone(), schema);
        }
        Ok(Self { schemas })
    }

    /// Load a schema from a JSON string.
    fn load_schema_from_str(content: &str) -> Result<Schema, Box<dyn std::error::Error>> {
        let schema: Schema = serde_json::from_str(content)?;
        Ok(schema)
    }

    /// Get a schema by collection name.
    pub fn get_schema(&self, collection: &str) -> Option<&Schema> {
        self.schemas.get(collection)
    }

    /// All registered collection names, in no particular order.
    pub fn collections(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Get all registered schemas.
    pub fn get_schemas(&self) -> Vec<&Schema> {
        self.schemas.values().collect()
    }

    /// Validate datetime format using chrono for full RFC 3339 compliance.
    ///
    /// Delegates to chrono's RFC 3339 parser, which handles semantic
    /// validation (no Feb 30th), timezone offsets and sub-second precision.
    pub(super) fn is_valid_datetime_format(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        DateTime::<FixedOffset>::parse_from_rfc3339(value).is_ok()
    }

    /// Get the type name of a JSON value for error messages.
    pub(super) fn get_value_type(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
            Value::Number(_) => "decimal",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new().expect("Failed to load embedded schemas")
    }
}
