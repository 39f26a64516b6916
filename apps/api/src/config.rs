use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Enrichment credentials are all optional; the features they power are
/// disabled when absent instead of failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub embeddings_api_url: String,
    pub embeddings_api_key: Option<String>,
    pub vector_index_host: Option<String>,
    pub vector_index_api_key: Option<String>,
    pub upload_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            embeddings_api_url: std::env::var("EMBEDDINGS_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            embeddings_api_key: optional_env("EMBEDDINGS_API_KEY"),
            vector_index_host: optional_env("VECTOR_INDEX_HOST"),
            vector_index_api_key: optional_env("VECTOR_INDEX_API_KEY"),
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "data/uploads".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// An unset or empty variable both mean "not configured".
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
