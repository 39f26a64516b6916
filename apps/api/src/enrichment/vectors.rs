//! Embedding persistence and similarity lookup.
//!
//! The trait seam exists so scoring code never knows which vector index is
//! behind it. The REST implementation embeds through an OpenAI-compatible
//! endpoint and stores into a Pinecone-style index over plain HTTP.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Embedding model sent to the embeddings endpoint.
pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";
/// Namespace pins the embedding dimension (1536) so a model swap can never
/// mix vectors of different widths in one index.
const NAMESPACE: &str = "dim1536";

const HTTP_TIMEOUT_SECS: u64 = 30;

/// Vector index operations used by the scoring pipeline.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Embeds `text` and upserts it under `id` with the source filename as
    /// metadata. An empty text is skipped, not an error.
    async fn embed_and_store(&self, id: &str, text: &str, filename: &str) -> Result<()>;

    /// Embeds `text` and returns its nearest stored neighbors.
    async fn find_similar(&self, text: &str, top_k: usize) -> Result<SimilarityMatches>;
}

/// Neighbor list returned by a similarity lookup. Default is no matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimilarityMatches {
    #[serde(default)]
    pub matches: Vec<SimilarityMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityMatch {
    pub id: String,
    /// Some indexes report `distance` instead of `score`.
    #[serde(default, alias = "distance")]
    pub score: f64,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Debug, Serialize)]
struct UpsertRequest<'a> {
    vectors: Vec<VectorRecord<'a>>,
    namespace: &'a str,
}

#[derive(Debug, Serialize)]
struct VectorRecord<'a> {
    id: &'a str,
    values: Vec<f32>,
    metadata: VectorMetadata<'a>,
}

#[derive(Debug, Serialize)]
struct VectorMetadata<'a> {
    filename: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: Vec<f32>,
    top_k: usize,
    include_metadata: bool,
    namespace: &'a str,
}

// ────────────────────────────────────────────────────────────────────────────
// REST implementation
// ────────────────────────────────────────────────────────────────────────────

/// HTTP-backed vector store: OpenAI-compatible embeddings plus a
/// Pinecone-style index data plane.
#[derive(Clone)]
pub struct RestVectorStore {
    client: Client,
    embeddings_url: String,
    embeddings_api_key: String,
    index_host: String,
    index_api_key: String,
}

impl RestVectorStore {
    pub fn new(
        embeddings_url: String,
        embeddings_api_key: String,
        index_host: String,
        index_api_key: String,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            embeddings_url,
            embeddings_api_key,
            index_host,
            index_api_key,
        }
    }

    /// Fetches one embedding. `None` for empty input, mirroring the skip in
    /// `embed_and_store`.
    async fn embed(&self, text: &str) -> Result<Option<Vec<f32>>> {
        if text.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/v1/embeddings", self.embeddings_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.embeddings_api_key)
            .json(&EmbeddingRequest {
                model: EMBEDDING_MODEL,
                input: text,
            })
            .send()
            .await
            .context("embeddings request failed")?
            .error_for_status()
            .context("embeddings endpoint returned an error status")?;

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .context("embeddings response was not valid JSON")?;

        Ok(parsed.data.into_iter().next().map(|d| d.embedding))
    }
}

#[async_trait]
impl VectorStore for RestVectorStore {
    async fn embed_and_store(&self, id: &str, text: &str, filename: &str) -> Result<()> {
        let Some(values) = self.embed(text).await? else {
            warn!("Empty embedding for id={id}; skipping store.");
            return Ok(());
        };

        let url = format!("{}/vectors/upsert", self.index_host);
        self.client
            .post(&url)
            .header("Api-Key", &self.index_api_key)
            .json(&UpsertRequest {
                vectors: vec![VectorRecord {
                    id,
                    values,
                    metadata: VectorMetadata { filename },
                }],
                namespace: NAMESPACE,
            })
            .send()
            .await
            .context("vector upsert request failed")?
            .error_for_status()
            .context("vector index rejected the upsert")?;

        debug!("Upserted vector {id} into namespace {NAMESPACE}");
        Ok(())
    }

    async fn find_similar(&self, text: &str, top_k: usize) -> Result<SimilarityMatches> {
        let Some(vector) = self.embed(text).await? else {
            return Ok(SimilarityMatches::default());
        };

        let url = format!("{}/query", self.index_host);
        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.index_api_key)
            .json(&QueryRequest {
                vector,
                top_k,
                include_metadata: true,
                namespace: NAMESPACE,
            })
            .send()
            .await
            .context("vector query request failed")?
            .error_for_status()
            .context("vector index rejected the query")?;

        response
            .json()
            .await
            .context("vector query response was not valid JSON")
    }
}
