//! Schema validation logic for record bodies.
//!
//! Validation is intentionally shallow: presence of required attributes,
//! type conformance of supplied attributes, and rejection of attributes the
//! schema does not declare. Value-level rules (non-negative amounts,
//! parseable dates) are out of scope; those fields travel as opaque
//! strings and numbers.

use super::registry::SchemaRegistry;
use super::types::{AttributeDefinition, AttributeType, Schema};
use crate::error::{ValidationError, ValidationResult};
use serde_json::Value;

/// Which operation a record body is being validated for.
///
/// Create bodies must carry every required attribute; update bodies are
/// partial, so only the attributes actually supplied are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationContext {
    Create,
    Update,
}

impl SchemaRegistry {
    /// Validate a record body against a schema.
    pub fn validate_record(
        &self,
        schema: &Schema,
        record: &Value,
        context: OperationContext,
    ) -> ValidationResult<()> {
        let obj = record
            .as_object()
            .ok_or_else(|| ValidationError::custom("record must be a JSON object"))?;

        // Required attributes are a create-only concern; an update body is
        // partial by definition.
        if context == OperationContext::Create {
            for attr_def in &schema.attributes {
                let value = obj.get(&attr_def.name);
                if attr_def.required && value.is_none_or(Value::is_null) {
                    return Err(ValidationError::missing_required(&attr_def.name));
                }
            }
        }

        // Type-check every supplied attribute and reject undeclared ones.
        for (field_name, value) in obj {
            if field_name == "_id" {
                // Server-assigned; the provider strips or overwrites it.
                continue;
            }
            let Some(attr_def) = schema.get_attribute(field_name) else {
                return Err(ValidationError::UnknownAttribute {
                    attribute: field_name.clone(),
                    schema: schema.name.clone(),
                });
            };
            if value.is_null() {
                // Null means "absent"; create required-ness was checked above.
                continue;
            }
            self.validate_attribute_value(attr_def, value)?;
        }

        Ok(())
    }

    /// Validate the value of an attribute against its declared type.
    fn validate_attribute_value(
        &self,
        attr_def: &AttributeDefinition,
        value: &Value,
    ) -> ValidationResult<()> {
        let type_error = || {
            ValidationError::invalid_type(
                &attr_def.name,
                attr_def.data_type.display_name(),
                Self::get_value_type(value),
            )
        };

        match attr_def.data_type {
            AttributeType::String => {
                if !value.is_string() {
                    return Err(type_error());
                }
            }
            AttributeType::Integer => {
                if !value.is_i64() && !value.is_u64() {
                    return Err(type_error());
                }
            }
            AttributeType::Decimal => {
                // Whole numbers are valid decimals.
                if !value.is_number() {
                    return Err(type_error());
                }
            }
            AttributeType::Boolean => {
                if !value.is_boolean() {
                    return Err(type_error());
                }
            }
            AttributeType::DateTime => {
                let Some(str_val) = value.as_str() else {
                    return Err(type_error());
                };
                if !self.is_valid_datetime_format(str_val) {
                    return Err(ValidationError::InvalidDateTimeFormat {
                        attribute: attr_def.name.clone(),
                        value: str_val.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
