//! Resume critique and rewrite calls.
//!
//! The critique is best-effort from the caller's perspective: a model that
//! strays from the JSON contract downgrades the outcome to a raw payload,
//! and a dead upstream downgrades it to an error marker. Only the explicit
//! rewrite endpoints surface errors to the client.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::enrichment::prompts::{
    BULLET_REWRITE_PROMPT_TEMPLATE, BULLET_REWRITE_SYSTEM, FULL_REWRITE_PROMPT_TEMPLATE,
    FULL_REWRITE_SYSTEM, INSIGHT_PROMPT_TEMPLATE, INSIGHT_SYSTEM,
};
use crate::enrichment::truncate_chars;
use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, LlmClient};

const INSIGHT_MAX_TOKENS: u32 = 800;
const BULLET_REWRITE_MAX_TOKENS: u32 = 150;
const FULL_REWRITE_MAX_TOKENS: u32 = 1200;

/// Characters of resume and job text fed to the critique prompt.
const INSIGHT_TEXT_CHARS: usize = 4000;
/// Character budgets for the full rewrite prompt.
const REWRITE_JOB_CHARS: usize = 2000;
const REWRITE_RESUME_CHARS: usize = 4000;

/// Rewrite style used when the client does not pick one.
pub const DEFAULT_BULLET_STYLE: &str = "quantified";
/// Tone used when the full-rewrite request does not pick one.
pub const DEFAULT_REWRITE_TONE: &str = "leadership";

/// One role suggestion from the critique call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedRole {
    pub role: String,
    pub confidence: f64,
}

/// Structured critique of one resume against one job description.
///
/// Fields default rather than fail: a model that drops a key still parses,
/// only shape violations fall back to the raw payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeInsight {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub fit_score: Option<u32>,
    #[serde(default)]
    pub quick_recommendation: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub suggested_roles: Vec<SuggestedRole>,
}

/// What a critique attempt actually produced.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum InsightOutcome {
    Structured(ResumeInsight),
    Raw { raw: String },
    Unavailable { error: String },
}

impl InsightOutcome {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            error: message.into(),
        }
    }
}

/// Asks the LLM to compare one resume against the job description.
/// Never fails: transport errors and contract violations downgrade the
/// outcome instead.
pub async fn critique_resume(llm: &LlmClient, resume_text: &str, job_text: &str) -> InsightOutcome {
    let prompt = INSIGHT_PROMPT_TEMPLATE
        .replace("{resume_text}", truncate_chars(resume_text, INSIGHT_TEXT_CHARS))
        .replace("{job_text}", truncate_chars(job_text, INSIGHT_TEXT_CHARS));

    let response = match llm.call(&prompt, INSIGHT_SYSTEM, INSIGHT_MAX_TOKENS).await {
        Ok(response) => response,
        Err(err) => {
            warn!("Resume critique call failed: {err}");
            return InsightOutcome::unavailable("LLM analysis failed.");
        }
    };

    match response.text() {
        Some(text) => parse_insight(text),
        None => InsightOutcome::unavailable("LLM returned empty content"),
    }
}

/// Parses the critique payload, keeping the raw text when the model strays
/// from the JSON contract.
fn parse_insight(text: &str) -> InsightOutcome {
    match serde_json::from_str::<ResumeInsight>(strip_json_fences(text)) {
        Ok(insight) => InsightOutcome::Structured(insight),
        Err(err) => {
            warn!("LLM returned non-JSON critique; keeping raw text: {err}");
            InsightOutcome::Raw {
                raw: text.to_string(),
            }
        }
    }
}

/// Rewrites a single resume bullet in the requested style.
pub async fn rewrite_bullet(
    llm: &LlmClient,
    bullet: &str,
    style: &str,
) -> Result<String, AppError> {
    let prompt = BULLET_REWRITE_PROMPT_TEMPLATE
        .replace("{style}", style)
        .replace("{bullet}", bullet);

    let response = llm
        .call(&prompt, BULLET_REWRITE_SYSTEM, BULLET_REWRITE_MAX_TOKENS)
        .await
        .map_err(|e| AppError::Llm(format!("Bullet rewrite failed: {e}")))?;

    let text = response
        .text()
        .ok_or_else(|| AppError::Llm("LLM returned empty content".to_string()))?;

    Ok(text.trim().to_string())
}

/// Rewrites a whole resume against the job description in the given tone.
pub async fn rewrite_resume(
    llm: &LlmClient,
    resume_text: &str,
    job_text: &str,
    tone: &str,
) -> Result<String, AppError> {
    let prompt = FULL_REWRITE_PROMPT_TEMPLATE
        .replace("{tone}", tone)
        .replace("{job_text}", truncate_chars(job_text, REWRITE_JOB_CHARS))
        .replace("{resume_text}", truncate_chars(resume_text, REWRITE_RESUME_CHARS));

    let response = llm
        .call(&prompt, FULL_REWRITE_SYSTEM, FULL_REWRITE_MAX_TOKENS)
        .await
        .map_err(|e| AppError::Llm(format!("Resume rewrite failed: {e}")))?;

    let text = response
        .text()
        .ok_or_else(|| AppError::Llm("LLM returned empty content".to_string()))?;

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insight_structured() {
        let payload = r#"{
            "strengths": ["rust", "distributed systems"],
            "missing_skills": ["kubernetes"],
            "fit_score": 78,
            "quick_recommendation": "Strong candidate.",
            "tone": "technical",
            "suggested_roles": [{"role": "Backend Engineer", "confidence": 85}]
        }"#;

        match parse_insight(payload) {
            InsightOutcome::Structured(insight) => {
                assert_eq!(insight.strengths.len(), 2);
                assert_eq!(insight.fit_score, Some(78));
                assert_eq!(insight.tone, "technical");
                assert_eq!(insight.suggested_roles[0].role, "Backend Engineer");
                assert_eq!(insight.suggested_roles[0].confidence, 85.0);
            }
            other => panic!("expected structured outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_insight_strips_fences() {
        let payload = "```json\n{\"fit_score\": 50}\n```";
        match parse_insight(payload) {
            InsightOutcome::Structured(insight) => {
                assert_eq!(insight.fit_score, Some(50));
                assert!(insight.strengths.is_empty());
            }
            other => panic!("expected structured outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_insight_missing_keys_default() {
        match parse_insight("{}") {
            InsightOutcome::Structured(insight) => {
                assert!(insight.strengths.is_empty());
                assert_eq!(insight.fit_score, None);
                assert_eq!(insight.quick_recommendation, "");
            }
            other => panic!("expected structured outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_insight_non_json_keeps_raw() {
        let payload = "Here are my thoughts about the resume...";
        match parse_insight(payload) {
            InsightOutcome::Raw { raw } => assert_eq!(raw, payload),
            other => panic!("expected raw outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_outcome_serializes_untagged() {
        let raw = serde_json::to_value(InsightOutcome::Raw {
            raw: "text".to_string(),
        })
        .unwrap();
        assert_eq!(raw, serde_json::json!({"raw": "text"}));

        let unavailable = serde_json::to_value(InsightOutcome::unavailable("down")).unwrap();
        assert_eq!(unavailable, serde_json::json!({"error": "down"}));

        let structured = serde_json::to_value(InsightOutcome::Structured(ResumeInsight {
            strengths: vec!["a".to_string()],
            missing_skills: Vec::new(),
            fit_score: Some(10),
            quick_recommendation: "ok".to_string(),
            tone: "technical".to_string(),
            suggested_roles: Vec::new(),
        }))
        .unwrap();
        assert_eq!(structured["fit_score"], 10);
        assert_eq!(structured["strengths"][0], "a");
    }
}
