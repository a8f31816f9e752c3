//! Common test utilities for driving the HTTP surface.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use mutuelle_server::provider::CollectionProvider;
use mutuelle_server::storage::InMemoryStore;

/// A router plus a handle to the store behind it, so tests can seed or
/// inspect state without going through HTTP.
pub struct TestContext {
    pub app: Router,
    pub store: InMemoryStore,
}

/// Build an app over a fresh in-memory store.
pub fn setup() -> TestContext {
    let store = InMemoryStore::new();
    let provider = CollectionProvider::new(store.clone());
    let app =
        mutuelle_server::http::build_router(provider, &["http://localhost:5173".to_string()]);
    TestContext { app, store }
}

/// Send a request with no body.
pub async fn send(app: &Router, method: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a request with a JSON body.
pub async fn send_json(app: &Router, method: &str, uri: &str, body: &Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid agent create body.
pub fn agent_body() -> Value {
    json!({
        "matricule": "1",
        "nom": "Dupont",
        "prenom": "Jean",
        "age": 30,
        "address": "Rue A",
        "tele": "0600000000"
    })
}

/// A valid medecin create body.
pub fn medecin_body() -> Value {
    json!({
        "speciality": "Cardiologie",
        "nom": "Alami",
        "prenom": "Sara",
        "address": "Avenue B",
        "tele": "0522000000"
    })
}

/// A valid pharmacie create body.
pub fn pharmacie_body() -> Value {
    json!({
        "nom": "Pharmacie Centrale",
        "address": "Place C",
        "tele": "0523000000"
    })
}

/// A valid dossier create body.
pub fn dossier_body() -> Value {
    json!({
        "matricule": "1",
        "medecinId": "5f9f1b9c1c9d440000f1b5f5",
        "maladie": "Grippe",
        "montant": 1000.0,
        "date": "2020-10-27"
    })
}
