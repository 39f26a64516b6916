mod analysis;
mod config;
mod enrichment;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::vocabulary::Vocabulary;
use crate::config::Config;
use crate::enrichment::vectors::{RestVectorStore, VectorStore};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::UploadStore;

/// Request bodies above this size are rejected before multipart parsing.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (enrichment credentials may be absent)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Shortlist API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client when a key is configured
    let llm = match &config.anthropic_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone());
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set. LLM critique and rewrites disabled.");
            None
        }
    };

    // Initialize the vector store when embeddings and index creds are set
    let vectors = build_vector_store(&config);

    // Ensure the upload directory exists
    let uploads = UploadStore::new(&config.upload_dir);
    uploads.ensure_dir().await?;
    info!("Upload dir ready at {}", config.upload_dir);

    // Build app state
    let state = AppState {
        config: config.clone(),
        vocab: Arc::new(Vocabulary::default()),
        llm,
        vectors,
        uploads,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // TODO: tighten CORS in production
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the REST vector store when every credential it needs is set.
fn build_vector_store(config: &Config) -> Option<Arc<dyn VectorStore>> {
    match (
        &config.embeddings_api_key,
        &config.vector_index_host,
        &config.vector_index_api_key,
    ) {
        (Some(embeddings_key), Some(index_host), Some(index_key)) => {
            info!("Vector store initialized at {index_host}");
            Some(Arc::new(RestVectorStore::new(
                config.embeddings_api_url.clone(),
                embeddings_key.clone(),
                index_host.clone(),
                index_key.clone(),
            )))
        }
        _ => {
            warn!("Embedding credentials not set. Similarity features disabled.");
            None
        }
    }
}
