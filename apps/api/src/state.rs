use std::sync::Arc;

use crate::analysis::vocabulary::Vocabulary;
use crate::config::Config;
use crate::enrichment::vectors::VectorStore;
use crate::llm_client::LlmClient;
use crate::storage::UploadStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Fixed extractor vocabularies, shared read-only across requests.
    pub vocab: Arc<Vocabulary>,
    /// LLM critique and rewrites. None scores resumes without them.
    pub llm: Option<LlmClient>,
    /// Pluggable vector index. Default: RestVectorStore when creds are set.
    pub vectors: Option<Arc<dyn VectorStore>>,
    pub uploads: UploadStore,
}
