pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as scoring;
use crate::enrichment::handlers as rewrites;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring API
        .route("/api/v1/analyze", post(scoring::handle_analyze))
        .route("/api/v1/uploads/:filename", get(scoring::handle_download))
        // Rewrite API
        .route("/api/v1/rewrite/bullet", post(rewrites::handle_rewrite_bullet))
        .route("/api/v1/rewrite/full", post(rewrites::handle_rewrite_full))
        .with_state(state)
}
