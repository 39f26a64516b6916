//! HTTP handlers for the scoring API.
//!
//! `handle_analyze` owns every request-level concern: multipart parsing,
//! input validation, upload persistence and text extraction. Scoring itself
//! lives in the pipeline. Per-resume extraction failures degrade to empty
//! text so one unreadable PDF never sinks the batch; job-side failures
//! reject the request with an actionable message.

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::pipeline::{score_resumes, ExtractedResume, ResumeReport};
use crate::enrichment::linkedin::{analyze_profile, ProfileOutcome};
use crate::enrichment::vectors::SimilarityMatches;
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::state::AppState;

/// Most resumes accepted in one batch.
pub const MAX_RESUMES: usize = 20;

/// One uploaded file pulled out of the multipart body.
struct UploadedFile {
    name: String,
    bytes: Bytes,
}

/// Everything one scoring request produced. `results` is the full ranked
/// list; `selected` and `comparison` are lightweight views of the top-N
/// and top-two prefixes so clients can render both without re-sorting.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub job_filename: String,
    pub job_stored_name: String,
    pub job_title: Option<String>,
    pub top_n: usize,
    pub analyzed_at: DateTime<Utc>,
    pub selected: Vec<RankedSummary>,
    pub comparison: Vec<RankedSummary>,
    pub results: Vec<ResumeReport>,
    pub similarity: SimilarityMatches,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<ProfileOutcome>,
}

/// Id, name and score of one ranked resume, enough to reference the full
/// report in `results`.
#[derive(Debug, Serialize)]
pub struct RankedSummary {
    pub id: Uuid,
    pub original_name: String,
    pub relevance_score: u32,
}

fn summarize(reports: &[ResumeReport]) -> Vec<RankedSummary> {
    reports
        .iter()
        .map(|r| RankedSummary {
            id: r.id,
            original_name: r.original_name.clone(),
            relevance_score: r.features.relevance_score,
        })
        .collect()
}

/// POST /api/v1/analyze
///
/// Multipart fields: `resume` (repeated, PDF), `job` (PDF), `job_title`
/// (text, optional), `linkedin_url` (text, optional), `top_n` (text,
/// default 1).
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    // Step 1: Collect multipart fields
    let mut resume_files: Vec<UploadedFile> = Vec::new();
    let mut job_file: Option<UploadedFile> = None;
    let mut job_title: Option<String> = None;
    let mut linkedin_url = String::new();
    let mut top_n: usize = 1;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };
        match field_name.as_str() {
            "resume" => {
                let name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                resume_files.push(UploadedFile { name, bytes });
            }
            "job" => {
                let name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                job_file = Some(UploadedFile { name, bytes });
            }
            "job_title" => {
                let text = field.text().await.map_err(bad_multipart)?;
                let text = text.trim().to_string();
                job_title = (!text.is_empty()).then_some(text);
            }
            "linkedin_url" => {
                linkedin_url = field.text().await.map_err(bad_multipart)?.trim().to_string();
            }
            "top_n" => {
                let raw = field.text().await.map_err(bad_multipart)?;
                top_n = raw.trim().parse().map_err(|_| {
                    AppError::Validation("top_n must be a positive integer".to_string())
                })?;
            }
            _ => {}
        }
    }

    // Step 2: Validate the batch
    if resume_files.is_empty() {
        return Err(AppError::Validation(
            "Please upload at least one resume PDF.".to_string(),
        ));
    }
    if resume_files.len() > MAX_RESUMES {
        return Err(AppError::Validation(format!(
            "Please upload at most {MAX_RESUMES} resumes."
        )));
    }
    let job_file = job_file.ok_or_else(|| {
        AppError::Validation("Please upload a job description PDF.".to_string())
    })?;
    if !is_pdf(&job_file.name) {
        return Err(AppError::Validation(
            "Job description must be a PDF.".to_string(),
        ));
    }

    // Step 3: Persist the job description and extract its text (hard error)
    let job_stored_name = store_upload(&state, &job_file).await?;
    let job_text = extract_pdf_text(job_file.bytes.clone()).await?.map_err(|err| {
        AppError::UnprocessableEntity(format!(
            "Could not extract text from the job description PDF: {err}"
        ))
    })?;

    // Step 4: LinkedIn profile review (best-effort)
    let linkedin = if linkedin_url.is_empty() {
        None
    } else {
        Some(analyze_profile(state.llm.as_ref(), &linkedin_url).await)
    };

    // Step 5: Persist and extract each resume; non-PDFs are skipped,
    // unreadable PDFs score as empty text
    let mut extracted = Vec::with_capacity(resume_files.len());
    for file in resume_files {
        if file.name.is_empty() || !is_pdf(&file.name) {
            warn!("Skipping non-PDF resume upload: {:?}", file.name);
            continue;
        }
        let stored_name = store_upload(&state, &file).await?;
        let original_name = file.name;
        let text = match extract_pdf_text(file.bytes).await? {
            Ok(text) => text,
            Err(err) => {
                warn!("Text extraction failed for {original_name}: {err:#}");
                String::new()
            }
        };
        extracted.push(ExtractedResume {
            original_name,
            stored_name,
            text,
        });
    }
    if extracted.is_empty() {
        return Err(AppError::Validation("No valid resumes uploaded.".to_string()));
    }

    // Step 6: Score, rank, enrich
    let outcome = score_resumes(
        &state.vocab,
        state.llm.as_ref(),
        state.vectors.as_deref(),
        &job_text,
        extracted,
    )
    .await;

    let top_n = outcome.ranked.clamp_count(top_n);
    info!(
        "Scored {} resumes against {}; top_n={top_n}",
        outcome.ranked.all().len(),
        job_file.name
    );

    Ok(Json(AnalysisResponse {
        job_filename: job_file.name,
        job_stored_name,
        job_title,
        top_n,
        analyzed_at: Utc::now(),
        selected: summarize(outcome.ranked.top(top_n)),
        comparison: summarize(outcome.ranked.top_two()),
        results: outcome.ranked.into_vec(),
        similarity: outcome.similarity,
        linkedin,
    }))
}

/// GET /api/v1/uploads/:filename
/// Serves a previously stored PDF back to the client.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = state
        .uploads
        .read(&filename)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("No stored upload named '{filename}'")))?;

    Ok(([(header::CONTENT_TYPE, "application/pdf")], bytes))
}

async fn store_upload(state: &AppState, file: &UploadedFile) -> Result<String, AppError> {
    state
        .uploads
        .save(&file.name, &file.bytes)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))
}

/// Runs PDF extraction on the blocking pool. The outer error is a task
/// failure (hard); the inner one is an unreadable document (caller decides).
async fn extract_pdf_text(bytes: Bytes) -> Result<anyhow::Result<String>, AppError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart request: {err}"))
}

fn is_pdf(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
}
