//! Schema definitions and validation for mutuelle records.
//!
//! Each resource collection is described by a [`Schema`]: a flat list of
//! attribute definitions with a type and a required flag. Schemas are
//! embedded in the library as JSON documents and managed by the
//! [`SchemaRegistry`], which also provides create/update validation.
//!
//! # Examples
//!
//! ```rust
//! use mutuelle_server::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let agent_schema = registry.get_schema("agents").unwrap();
//! assert_eq!(agent_schema.name, "Agent");
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod registry;
pub mod types;
pub mod validation;


// Re-export the main types for convenience
pub use registry::SchemaRegistry;
pub use types::{AttributeDefinition, AttributeType, Schema};
pub use validation::OperationContext;
