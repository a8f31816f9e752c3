// Main entry point for the mutuelle API server

use anyhow::{Context, Result, bail};
use log::info;

use mutuelle_server::config::Config;
use mutuelle_server::http::build_router;
use mutuelle_server::provider::CollectionProvider;
use mutuelle_server::storage::InMemoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting mutuelle API server");

    let config = Config::from_env().context("Failed to load configuration")?;

    // The store handle is built once here and cloned into every handler;
    // there is no explicit teardown.
    let store = match config.store_url.as_str() {
        "memory:" => InMemoryStore::new(),
        other => bail!("Unsupported STORE_URL '{other}' (expected 'memory:')"),
    };
    info!("Document store ready ({})", config.store_url);

    let provider = CollectionProvider::new(store);
    let app = build_router(provider, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
