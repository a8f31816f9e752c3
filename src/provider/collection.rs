//! Store-backed resource provider.
//!
//! One [`CollectionProvider`] serves every collection; each call receives
//! the schema of the collection it operates on. The provider owns record
//! validation, identifier generation and the re-fetch flows; the store
//! underneath only persists documents.

use crate::error::ValidationError;
use crate::schema::{OperationContext, Schema, SchemaRegistry};
use crate::storage::{DocumentKey, DocumentStore};
use log::{debug, info, trace, warn};
use serde_json::{Map, Value, json};

use super::error::{ProviderError, ProviderResult};

/// Maximum number of records a list call returns.
pub const MAX_LIST_RESULTS: usize = 100;

/// Generic CRUD provider with a pluggable storage backend.
#[derive(Debug, Clone)]
pub struct CollectionProvider<S: DocumentStore> {
    storage: S,
    registry: SchemaRegistry,
}

impl<S: DocumentStore> CollectionProvider<S> {
    /// Create a provider over the given storage backend, using the embedded
    /// collection schemas.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            registry: SchemaRegistry::default(),
        }
    }

    /// Create a provider with an explicit schema registry.
    pub fn with_registry(storage: S, registry: SchemaRegistry) -> Self {
        Self { storage, registry }
    }

    /// The schema registry backing this provider.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Generate a new record identifier.
    fn generate_record_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// List up to [`MAX_LIST_RESULTS`] records, in the store's natural order.
    pub async fn list_records(&self, schema: &Schema) -> ProviderResult<Vec<Value>> {
        debug!("Listing {} records", schema.collection);

        let records = self
            .storage
            .find_many(&schema.collection, MAX_LIST_RESULTS)
            .await
            .map_err(ProviderError::storage)?;

        debug!("Found {} {} records", records.len(), schema.collection);
        Ok(records)
    }

    /// Fetch one record by identifier.
    pub async fn get_record(&self, schema: &Schema, id: &str) -> ProviderResult<Value> {
        debug!("Getting {} record with id '{}'", schema.collection, id);

        let key = DocumentKey::new(&schema.collection, id);
        let record = self
            .storage
            .find_one(key)
            .await
            .map_err(ProviderError::storage)?;

        record.ok_or_else(|| ProviderError::not_found(&schema.name, &schema.collection, id))
    }

    /// Validate a full record body, assign it a fresh identifier, persist it
    /// and return the persisted form.
    pub async fn create_record(&self, schema: &Schema, body: Value) -> ProviderResult<Value> {
        info!("Creating {} record", schema.collection);
        trace!(
            "Create body: {}",
            serde_json::to_string(&body).unwrap_or_else(|_| "invalid json".to_string())
        );

        self.registry
            .validate_record(schema, &body, OperationContext::Create)?;

        let mut record = body;
        let id = self.generate_record_id();
        if let Some(fields) = record.as_object_mut() {
            // A client-supplied _id never survives; the server assigns ids.
            fields.insert("_id".to_string(), json!(id));
        }

        let inserted_id = self
            .storage
            .insert_one(&schema.collection, record)
            .await
            .map_err(ProviderError::storage)?;

        // Return the record as the store persisted it, not as submitted.
        let key = DocumentKey::new(&schema.collection, &inserted_id);
        let created = self
            .storage
            .find_one(key)
            .await
            .map_err(ProviderError::storage)?
            .ok_or_else(|| {
                ProviderError::internal(format!(
                    "created {} record '{}' missing on re-fetch",
                    schema.collection, inserted_id
                ))
            })?;

        info!("Created {} record with id '{}'", schema.collection, inserted_id);
        Ok(created)
    }

    /// Apply a partial update and return the record's current form.
    ///
    /// Fields that are absent or `null` are stripped, as is any `_id` (the
    /// path identifier always wins). A non-empty remainder is merged into
    /// the stored record; the store reports a modified count, where a merge
    /// of already-current values counts as no modification. Whenever the
    /// merge reports nothing changed, the record is re-fetched so that a
    /// same-value update still returns 200 with the existing record, and
    /// only a genuinely absent identifier yields not-found.
    pub async fn update_record(
        &self,
        schema: &Schema,
        id: &str,
        body: Value,
    ) -> ProviderResult<Value> {
        info!("Updating {} record with id '{}'", schema.collection, id);
        trace!(
            "Update body: {}",
            serde_json::to_string(&body).unwrap_or_else(|_| "invalid json".to_string())
        );

        let Some(fields) = body.as_object() else {
            return Err(ProviderError::Validation(ValidationError::custom(
                "record must be a JSON object",
            )));
        };

        let changes: Map<String, Value> = fields
            .iter()
            .filter(|(name, value)| name.as_str() != "_id" && !value.is_null())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        let key = DocumentKey::new(&schema.collection, id);

        if !changes.is_empty() {
            let changes = Value::Object(changes);
            self.registry
                .validate_record(schema, &changes, OperationContext::Update)?;

            let modified = self
                .storage
                .update_one(key.clone(), changes)
                .await
                .map_err(ProviderError::storage)?;

            if modified == 1 {
                if let Some(updated) = self
                    .storage
                    .find_one(key.clone())
                    .await
                    .map_err(ProviderError::storage)?
                {
                    debug!("Updated {} record with id '{}'", schema.collection, id);
                    return Ok(updated);
                }
            }
        } else {
            debug!(
                "Update body for {} record '{}' is empty after stripping, skipping merge",
                schema.collection, id
            );
        }

        // Zero modifications: either the record doesn't exist, or the merge
        // was a no-op. Existence decides between 200 and not-found.
        let existing = self
            .storage
            .find_one(key)
            .await
            .map_err(ProviderError::storage)?;

        existing.ok_or_else(|| ProviderError::not_found(&schema.name, &schema.collection, id))
    }

    /// Remove one record by identifier.
    pub async fn delete_record(&self, schema: &Schema, id: &str) -> ProviderResult<()> {
        info!("Deleting {} record with id '{}'", schema.collection, id);

        let key = DocumentKey::new(&schema.collection, id);
        let removed = self
            .storage
            .delete_one(key)
            .await
            .map_err(ProviderError::storage)?;

        if !removed {
            warn!(
                "Attempted to delete non-existent {} record with id '{}'",
                schema.collection, id
            );
            return Err(ProviderError::not_found(&schema.name, &schema.collection, id));
        }

        debug!("Deleted {} record with id '{}'", schema.collection, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use serde_json::json;

    fn provider() -> CollectionProvider<InMemoryStore> {
        CollectionProvider::new(InMemoryStore::new())
    }

    fn agent_body() -> Value {
        json!({
            "matricule": "1",
            "nom": "Dupont",
            "prenom": "Jean",
            "age": 30,
            "address": "Rue A",
            "tele": "0600000000"
        })
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_echoes_fields() {
        let provider = provider();
        let schema = provider.registry().get_schema("agents").unwrap().clone();

        let created = provider.create_record(&schema, agent_body()).await.unwrap();

        let id = created["_id"].as_str().expect("generated _id");
        assert!(!id.is_empty());
        assert_eq!(created["nom"], "Dupont");
        assert_eq!(created["age"], 30);

        // Round-trip: get by the returned identifier yields the same record.
        let fetched = provider.get_record(&schema, id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_ignores_client_supplied_id() {
        let provider = provider();
        let schema = provider.registry().get_schema("pharmacies").unwrap().clone();

        let mut body = json!({"nom": "Centrale", "address": "Rue B", "tele": "05"});
        body["_id"] = json!("client-chosen");

        let created = provider.create_record(&schema, body).await.unwrap();
        assert_ne!(created["_id"], "client-chosen");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_body() {
        let provider = provider();
        let schema = provider.registry().get_schema("agents").unwrap().clone();

        let result = provider
            .create_record(&schema, json!({"matricule": "1"}))
            .await;
        assert!(matches!(result, Err(ProviderError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let provider = provider();
        let schema = provider.registry().get_schema("medecins").unwrap().clone();

        let result = provider.get_record(&schema, "doesnotexist").await;
        assert!(matches!(
            result,
            Err(ProviderError::NotFound { name, .. }) if name == "Medecin"
        ));
    }

    #[tokio::test]
    async fn test_list_caps_at_maximum() {
        let provider = provider();
        let schema = provider.registry().get_schema("pharmacies").unwrap().clone();

        for i in 0..(MAX_LIST_RESULTS + 20) {
            let body = json!({"nom": format!("Pharmacie {i}"), "address": "A", "tele": "T"});
            provider.create_record(&schema, body).await.unwrap();
        }

        let records = provider.list_records(&schema).await.unwrap();
        assert_eq!(records.len(), MAX_LIST_RESULTS);
    }

    #[tokio::test]
    async fn test_update_merges_supplied_fields_only() {
        let provider = provider();
        let schema = provider.registry().get_schema("agents").unwrap().clone();

        let created = provider.create_record(&schema, agent_body()).await.unwrap();
        let id = created["_id"].as_str().unwrap();

        let updated = provider
            .update_record(&schema, id, json!({"age": 31, "nom": null}))
            .await
            .unwrap();

        assert_eq!(updated["age"], 31);
        // Null fields are stripped, not applied.
        assert_eq!(updated["nom"], "Dupont");
    }

    #[tokio::test]
    async fn test_update_with_empty_body_returns_existing() {
        let provider = provider();
        let schema = provider.registry().get_schema("agents").unwrap().clone();

        let created = provider.create_record(&schema, agent_body()).await.unwrap();
        let id = created["_id"].as_str().unwrap();

        let result = provider.update_record(&schema, id, json!({})).await.unwrap();
        assert_eq!(result, created);

        let all_null = provider
            .update_record(&schema, id, json!({"nom": null, "age": null}))
            .await
            .unwrap();
        assert_eq!(all_null, created);
    }

    #[tokio::test]
    async fn test_update_same_values_returns_existing() {
        let provider = provider();
        let schema = provider.registry().get_schema("agents").unwrap().clone();

        let created = provider.create_record(&schema, agent_body()).await.unwrap();
        let id = created["_id"].as_str().unwrap();

        // The merge reports zero modifications; the fallback re-fetch still
        // finds and returns the record.
        let result = provider
            .update_record(&schema, id, json!({"nom": "Dupont"}))
            .await
            .unwrap();
        assert_eq!(result, created);
    }

    #[tokio::test]
    async fn test_update_missing_record_not_found() {
        let provider = provider();
        let schema = provider.registry().get_schema("dossiers").unwrap().clone();

        let result = provider
            .update_record(&schema, "doesnotexist", json!({"maladie": "Grippe"}))
            .await;
        assert!(matches!(
            result,
            Err(ProviderError::NotFound { name, .. }) if name == "Dossier"
        ));
    }

    #[tokio::test]
    async fn test_update_cannot_overwrite_id() {
        let provider = provider();
        let schema = provider.registry().get_schema("agents").unwrap().clone();

        let created = provider.create_record(&schema, agent_body()).await.unwrap();
        let id = created["_id"].as_str().unwrap();

        let updated = provider
            .update_record(&schema, id, json!({"_id": "hijacked", "age": 40}))
            .await
            .unwrap();

        assert_eq!(updated["_id"].as_str().unwrap(), id);
        assert_eq!(updated["age"], 40);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let provider = provider();
        let schema = provider.registry().get_schema("pharmacies").unwrap().clone();

        let created = provider
            .create_record(
                &schema,
                json!({"nom": "Centrale", "address": "Rue B", "tele": "05"}),
            )
            .await
            .unwrap();
        let id = created["_id"].as_str().unwrap();

        provider.delete_record(&schema, id).await.unwrap();

        let again = provider.delete_record(&schema, id).await;
        assert!(matches!(again, Err(ProviderError::NotFound { .. })));
    }
}
