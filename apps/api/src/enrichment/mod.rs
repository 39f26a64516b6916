//! Best-effort enrichment around the deterministic scoring core.
//!
//! Everything in here talks to an upstream service (Claude, the embedding
//! API, the vector index, LinkedIn). None of it may fail a scoring run:
//! outcomes degrade to raw or error payloads instead.

pub mod handlers;
pub mod linkedin;
pub mod llm;
pub mod prompts;
pub mod vectors;

/// First `limit` characters of `text`, cut on a char boundary.
pub(crate) fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
