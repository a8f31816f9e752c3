//! HTTP surface for the mutuelle API.
//!
//! One generic handler set serves all four collections; the `:resource`
//! path segment is resolved against the schema registry per request, so the
//! route table stays a single group. CORS is restricted to an explicit
//! origin allow-list with credentials allowed; methods and headers mirror
//! the request, which is the permitted way to combine "everything allowed"
//! with credentials.

pub mod error;
pub mod handlers;

pub use error::ApiError;

use axum::http::HeaderValue;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use log::warn;
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::provider::CollectionProvider;
use crate::storage::DocumentStore;

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState<S: DocumentStore> {
    pub provider: CollectionProvider<S>,
}

/// Welcome message for the root route.
async fn welcome() -> Json<Value> {
    Json(json!({"message": "Welcome to AMENDIS API"}))
}

/// Build the CORS layer from the configured origin allow-list.
///
/// Origins that don't parse as header values are skipped with a warning
/// rather than failing start-up.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping unparseable CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the application router.
pub fn build_router<S>(provider: CollectionProvider<S>, allowed_origins: &[String]) -> Router
where
    S: DocumentStore + Clone + 'static,
{
    let state = AppState { provider };

    Router::new()
        .route("/", get(welcome))
        .route("/:resource/all", get(handlers::list_records::<S>))
        .route("/:resource/:id", get(handlers::get_record::<S>))
        .route("/:resource/add", post(handlers::create_record::<S>))
        .route("/:resource/update/:id", post(handlers::update_record::<S>))
        .route("/:resource/delete/:id", delete(handlers::delete_record::<S>))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}
