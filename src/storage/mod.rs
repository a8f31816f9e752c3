//! Document-store abstraction for mutuelle collections.
//!
//! The [`DocumentStore`] trait defines the complete contract between the
//! server and its database: four named collections of JSON documents,
//! addressed by a string identifier kept in the `_id` field. The provider
//! layer owns everything else (validation, id generation, advisory errors),
//! so a backend only persists and retrieves documents.
//!
//! # Contract
//!
//! The store exposes exactly the operations the HTTP surface needs:
//! - `find_many` with a result limit, in the backend's natural order
//! - `find_one` by identifier
//! - `insert_one` of a full document (the `_id` is already set by the caller)
//! - `update_one` applying a partial merge, reporting the *modified count*:
//!   a merge that leaves the document byte-identical reports 0, exactly like
//!   a merge against a missing identifier
//! - `delete_one` reporting whether a document was removed
//!
//! Every operation is a single atomic call; there are no multi-document
//! transactions and no ordering guarantee between concurrent callers.
//!
//! # Example Usage
//!
//! ```rust
//! use mutuelle_server::storage::{DocumentStore, DocumentKey, InMemoryStore};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::new();
//!
//! let key = DocumentKey::new("agents", "123");
//! store
//!     .insert_one("agents", json!({"_id": "123", "nom": "Dupont"}))
//!     .await?;
//!
//! let found = store.find_one(key.clone()).await?;
//! assert!(found.is_some());
//!
//! let removed = store.delete_one(key).await?;
//! assert!(removed);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::StorageError;
pub use in_memory::InMemoryStore;

use serde_json::Value;
use std::fmt;
use std::future::Future;

/// A key identifying one document in the store.
///
/// Documents are organized as `collection` → `document_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    collection: String,
    document_id: String,
}

impl DocumentKey {
    /// Create a new document key.
    pub fn new(collection: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            document_id: document_id.into(),
        }
    }

    /// Get the collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Get the document identifier.
    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.document_id)
    }
}

/// Core trait for document-store backends.
///
/// Implementations persist raw JSON documents per collection without any
/// knowledge of record schemas or HTTP semantics. All methods return futures
/// and must be safe to call concurrently; beyond per-call atomicity, no
/// consistency is promised between callers.
pub trait DocumentStore: Send + Sync {
    /// The error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch up to `limit` documents from a collection, in the store's
    /// natural order.
    fn find_many(
        &self,
        collection: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Value>, Self::Error>> + Send;

    /// Fetch the document whose `_id` equals the key's identifier.
    ///
    /// Returns `None` on a miss; a miss is not an error.
    fn find_one(
        &self,
        key: DocumentKey,
    ) -> impl Future<Output = Result<Option<Value>, Self::Error>> + Send;

    /// Insert a document and return its identifier.
    ///
    /// The document must already carry its `_id` as a string; the returned
    /// identifier is that value echoed back, mirroring the insert-one call
    /// of a driver that reports the inserted id.
    fn insert_one(
        &self,
        collection: &str,
        document: Value,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Apply a partial merge to the document matching the key, setting only
    /// the fields present in `changes`.
    ///
    /// Returns the modified count: 1 if a document was found *and* actually
    /// changed, 0 otherwise. A merge whose values all equal the stored ones
    /// reports 0, indistinguishable from a missing identifier; callers that
    /// need to tell the cases apart must re-fetch.
    fn update_one(
        &self,
        key: DocumentKey,
        changes: Value,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Remove the document matching the key.
    ///
    /// Returns `true` if a document was deleted, `false` if none matched.
    fn delete_one(&self, key: DocumentKey)
    -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Count the documents in a collection.
    fn count_documents(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<usize, Self::Error>> + Send;

    /// Remove every document from every collection.
    ///
    /// Primarily intended for tests.
    fn clear(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
