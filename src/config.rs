//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Origins allowed by default when `ALLOWED_ORIGINS` is not set: the
/// deployed front-end and API hosts plus local development servers.
pub fn default_allowed_origins() -> Vec<String> {
    [
        "https://ges-mutuelle-amendis.vercel.app",
        "https://get-mutuelle-api.herokuapp.com",
        "http://127.0.0.1:8000",
        "http://localhost",
        "http://localhost:8000",
        "http://localhost:5173",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Document-store connection string (`memory:` for the in-memory backend)
    pub store_url: String,
    /// CORS origin allow-list
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let store_url = env::var("STORE_URL").unwrap_or_else(|_| "memory:".to_string());

        let allowed_origins = match env::var("ALLOWED_ORIGINS") {
            Ok(raw) => {
                let origins: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect();
                if origins.is_empty() {
                    anyhow::bail!("ALLOWED_ORIGINS is set but contains no origins");
                }
                origins
            }
            Err(_) => default_allowed_origins(),
        };

        // Catch malformed bind addresses at start-up, not at first bind.
        bind_addr
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("BIND_ADDR '{bind_addr}' is not a valid socket address"))?;

        Ok(Self {
            bind_addr,
            store_url,
            allowed_origins,
        })
    }
}
