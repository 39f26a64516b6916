//! HTTP handlers for the rewrite API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::enrichment::llm::{
    rewrite_bullet, rewrite_resume, DEFAULT_BULLET_STYLE, DEFAULT_REWRITE_TONE,
};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct RewriteBulletRequest {
    #[serde(default)]
    pub bullet: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewriteBulletResponse {
    pub rewritten: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RewriteFullRequest {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub job: String,
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewriteFullResponse {
    pub rewritten_resume: String,
}

/// POST /api/v1/rewrite/bullet
pub async fn handle_rewrite_bullet(
    State(state): State<AppState>,
    Json(request): Json<RewriteBulletRequest>,
) -> Result<Json<RewriteBulletResponse>, AppError> {
    let bullet = request.bullet.trim();
    if bullet.is_empty() {
        return Err(AppError::Validation("no bullet provided".to_string()));
    }

    let llm = require_llm(&state)?;
    let rewritten = rewrite_bullet(llm, bullet, DEFAULT_BULLET_STYLE).await?;
    Ok(Json(RewriteBulletResponse { rewritten }))
}

/// POST /api/v1/rewrite/full
pub async fn handle_rewrite_full(
    State(state): State<AppState>,
    Json(request): Json<RewriteFullRequest>,
) -> Result<Json<RewriteFullResponse>, AppError> {
    if request.resume.trim().is_empty() || request.job.trim().is_empty() {
        return Err(AppError::Validation("resume and job required".to_string()));
    }

    let llm = require_llm(&state)?;
    let tone = request.tone.as_deref().unwrap_or(DEFAULT_REWRITE_TONE);
    let rewritten_resume = rewrite_resume(llm, &request.resume, &request.job, tone).await?;
    Ok(Json(RewriteFullResponse { rewritten_resume }))
}

fn require_llm(state: &AppState) -> Result<&LlmClient, AppError> {
    state
        .llm
        .as_ref()
        .ok_or_else(|| AppError::Llm("LLM features are disabled; set ANTHROPIC_API_KEY.".to_string()))
}
