//! CRUD backend for mutuelle management.
//!
//! Exposes four independent resource collections (agents, medecins,
//! pharmacies, dossiers) over HTTP, backed by a pluggable document store.
//! Every collection gets the same five operations (list, get, create,
//! partial update, delete) from one generic provider parameterized by a
//! collection schema.
//!
//! # Core Components
//!
//! - [`CollectionProvider`] - Generic CRUD provider over a document store
//! - [`DocumentStore`](storage::DocumentStore) - Trait for storage backends
//! - [`SchemaRegistry`] - Embedded per-collection record schemas
//! - [`http::build_router`] - The axum route table with CORS
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mutuelle_server::http::build_router;
//! use mutuelle_server::provider::CollectionProvider;
//! use mutuelle_server::storage::InMemoryStore;
//!
//! let provider = CollectionProvider::new(InMemoryStore::new());
//! let app = build_router(provider, &["http://localhost:5173".to_string()]);
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod provider;
pub mod schema;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{ValidationError, ValidationResult};
pub use provider::{CollectionProvider, MAX_LIST_RESULTS, ProviderError};
pub use schema::{AttributeDefinition, AttributeType, Schema, SchemaRegistry};
pub use storage::{DocumentKey, DocumentStore, InMemoryStore, StorageError};
