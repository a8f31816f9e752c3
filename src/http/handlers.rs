//! Request handlers, one set shared by every resource collection.
//!
//! Each handler resolves the `:resource` path segment to a schema and hands
//! the call to the provider. All four collections get identical behavior;
//! only the schema differs.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use crate::schema::Schema;
use crate::storage::DocumentStore;

use super::AppState;
use super::error::ApiError;

fn resolve_schema<S: DocumentStore>(
    state: &AppState<S>,
    resource: &str,
) -> Result<Schema, ApiError> {
    state
        .provider
        .registry()
        .get_schema(resource)
        .cloned()
        .ok_or(ApiError::UnknownResource)
}

/// `GET /:resource/all`: list up to the fixed cap of records.
pub async fn list_records<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path(resource): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let schema = resolve_schema(&state, &resource)?;
    let records = state.provider.list_records(&schema).await?;
    Ok(Json(records))
}

/// `GET /:resource/:id`: fetch a single record.
pub async fn get_record<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let schema = resolve_schema(&state, &resource)?;
    let record = state.provider.get_record(&schema, &id).await?;
    Ok(Json(record))
}

/// `POST /:resource/add`: create a record from a full body.
pub async fn create_record<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path(resource): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let schema = resolve_schema(&state, &resource)?;
    let created = state.provider.create_record(&schema, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `POST /:resource/update/:id`: apply a partial update.
pub async fn update_record<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path((resource, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let schema = resolve_schema(&state, &resource)?;
    let record = state.provider.update_record(&schema, &id, body).await?;
    Ok(Json(record))
}

/// `DELETE /:resource/delete/:id`: remove a record.
pub async fn delete_record<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let schema = resolve_schema(&state, &resource)?;
    state.provider.delete_record(&schema, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
