//! In-memory document store.
//!
//! A thread-safe [`DocumentStore`] backend holding every collection in a
//! nested map behind a tokio `RwLock`. It is the default backend for
//! development and tests, and the reference for the trait's semantics,
//! in particular the modified-count behavior of `update_one`, which matches
//! a MongoDB-style driver: merging values equal to what is stored reports
//! zero modifications.
//!
//! Listing order is ascending `_id`, which stands in for the "natural order"
//! of a real document database: stable, but meaningless to clients.

use crate::storage::{DocumentKey, DocumentStore, StorageError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory store.
///
/// Structure: `collection` → `document_id` → `document`. Cloning the store
/// clones the handle, not the data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: Arc<RwLock<HashMap<String, HashMap<String, Value>>>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn document_id_of(document: &Value) -> Result<String, StorageError> {
        document
            .get("_id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                StorageError::invalid_document("document must carry a string '_id' field")
            })
    }
}

impl DocumentStore for InMemoryStore {
    type Error = StorageError;

    async fn find_many(&self, collection: &str, limit: usize) -> Result<Vec<Value>, Self::Error> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let data_guard = self.data.read().await;

        let Some(documents) = data_guard.get(collection) else {
            return Ok(Vec::new());
        };

        // Sort ids for a stable order.
        let mut ids: Vec<_> = documents.keys().collect();
        ids.sort();

        let results = ids
            .into_iter()
            .take(limit)
            .filter_map(|id| documents.get(id).cloned())
            .collect();

        Ok(results)
    }

    async fn find_one(&self, key: DocumentKey) -> Result<Option<Value>, Self::Error> {
        let data_guard = self.data.read().await;

        let result = data_guard
            .get(key.collection())
            .and_then(|documents| documents.get(key.document_id()))
            .cloned();

        Ok(result)
    }

    async fn insert_one(&self, collection: &str, document: Value) -> Result<String, Self::Error> {
        if !document.is_object() {
            return Err(StorageError::invalid_document(
                "document must be a JSON object",
            ));
        }
        let id = Self::document_id_of(&document)?;

        let mut data_guard = self.data.write().await;
        let documents = data_guard.entry(collection.to_string()).or_default();
        documents.insert(id.clone(), document);

        Ok(id)
    }

    async fn update_one(&self, key: DocumentKey, changes: Value) -> Result<u64, Self::Error> {
        let Some(changes) = changes.as_object().cloned() else {
            return Err(StorageError::invalid_document(
                "update changes must be a JSON object",
            ));
        };

        let mut data_guard = self.data.write().await;

        let Some(document) = data_guard
            .get_mut(key.collection())
            .and_then(|documents| documents.get_mut(key.document_id()))
        else {
            return Ok(0);
        };

        let Some(fields) = document.as_object_mut() else {
            return Err(StorageError::internal(format!(
                "stored document {key} is not a JSON object"
            )));
        };

        // A merge that changes nothing reports a modified count of zero,
        // the same as a missing identifier.
        let mut modified = false;
        for (name, value) in changes {
            if fields.get(&name) != Some(&value) {
                fields.insert(name, value);
                modified = true;
            }
        }

        Ok(if modified { 1 } else { 0 })
    }

    async fn delete_one(&self, key: DocumentKey) -> Result<bool, Self::Error> {
        let mut data_guard = self.data.write().await;

        let existed = data_guard
            .get_mut(key.collection())
            .is_some_and(|documents| documents.remove(key.document_id()).is_some());

        Ok(existed)
    }

    async fn count_documents(&self, collection: &str) -> Result<usize, Self::Error> {
        let data_guard = self.data.read().await;

        let count = data_guard
            .get(collection)
            .map(|documents| documents.len())
            .unwrap_or(0);

        Ok(count)
    }

    async fn clear(&self) -> Result<(), Self::Error> {
        let mut data_guard = self.data.write().await;
        data_guard.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_and_find_one() {
        let store = InMemoryStore::new();
        let document = json!({"_id": "123", "nom": "Dupont"});

        let id = store.insert_one("agents", document.clone()).await.unwrap();
        assert_eq!(id, "123");

        let found = store.find_one(DocumentKey::new("agents", "123")).await.unwrap();
        assert_eq!(found, Some(document));
    }

    #[tokio::test]
    async fn test_insert_without_id_rejected() {
        let store = InMemoryStore::new();
        let result = store.insert_one("agents", json!({"nom": "Dupont"})).await;
        assert!(matches!(result, Err(StorageError::InvalidDocument { .. })));
    }

    #[tokio::test]
    async fn test_find_one_miss() {
        let store = InMemoryStore::new();
        let found = store.find_one(DocumentKey::new("agents", "999")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_many_is_limited_and_ordered() {
        let store = InMemoryStore::new();
        for i in 1..=5 {
            store
                .insert_one("agents", json!({"_id": format!("{i}"), "n": i}))
                .await
                .unwrap();
        }

        let all = store.find_many("agents", 100).await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0]["_id"], "1");

        let capped = store.find_many("agents", 3).await.unwrap();
        assert_eq!(capped.len(), 3);
        assert_eq!(capped[2]["_id"], "3");

        let none = store.find_many("agents", 0).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_find_many_unknown_collection() {
        let store = InMemoryStore::new();
        let results = store.find_many("clients", 100).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_update_one_merges_partially() {
        let store = InMemoryStore::new();
        store
            .insert_one("agents", json!({"_id": "1", "nom": "Dupont", "age": 30}))
            .await
            .unwrap();

        let modified = store
            .update_one(DocumentKey::new("agents", "1"), json!({"age": 31}))
            .await
            .unwrap();
        assert_eq!(modified, 1);

        let found = store.find_one(DocumentKey::new("agents", "1")).await.unwrap().unwrap();
        assert_eq!(found["age"], 31);
        assert_eq!(found["nom"], "Dupont");
    }

    #[tokio::test]
    async fn test_update_one_same_value_reports_zero() {
        let store = InMemoryStore::new();
        store
            .insert_one("agents", json!({"_id": "1", "nom": "Dupont"}))
            .await
            .unwrap();

        let modified = store
            .update_one(DocumentKey::new("agents", "1"), json!({"nom": "Dupont"}))
            .await
            .unwrap();
        assert_eq!(modified, 0);
    }

    #[tokio::test]
    async fn test_update_one_missing_reports_zero() {
        let store = InMemoryStore::new();
        let modified = store
            .update_one(DocumentKey::new("agents", "999"), json!({"nom": "X"}))
            .await
            .unwrap();
        assert_eq!(modified, 0);
    }

    #[tokio::test]
    async fn test_delete_one() {
        let store = InMemoryStore::new();
        store
            .insert_one("pharmacies", json!({"_id": "1", "nom": "Centrale"}))
            .await
            .unwrap();

        assert!(store.delete_one(DocumentKey::new("pharmacies", "1")).await.unwrap());
        assert!(!store.delete_one(DocumentKey::new("pharmacies", "1")).await.unwrap());
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = InMemoryStore::new();
        store
            .insert_one("agents", json!({"_id": "1", "nom": "A"}))
            .await
            .unwrap();
        store
            .insert_one("medecins", json!({"_id": "1", "nom": "M"}))
            .await
            .unwrap();

        assert_eq!(store.count_documents("agents").await.unwrap(), 1);
        assert_eq!(store.count_documents("medecins").await.unwrap(), 1);

        store.delete_one(DocumentKey::new("agents", "1")).await.unwrap();
        assert_eq!(store.count_documents("agents").await.unwrap(), 0);
        assert_eq!(store.count_documents("medecins").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryStore::new();
        store
            .insert_one("agents", json!({"_id": "1"}))
            .await
            .unwrap();

        store.clear().await.unwrap();
        assert_eq!(store.count_documents("agents").await.unwrap(), 0);
    }
}
