//! Resume Scoring — orchestrates the full scoring pipeline.
//!
//! Flow: extract_job_keywords → per-resume feature extraction →
//!       embedding store (best-effort) → LLM critique (best-effort) →
//!       rank by relevance → similarity lookup for the top resume.
//!
//! Feature extraction is pure and deterministic; the enrichment calls
//! degrade gracefully so a missing key or a dead upstream never fails
//! the scoring run.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::analysis::achievements::{detect_achievements, scan_phrases};
use crate::analysis::experience::{detect_education, years_of_experience, Education};
use crate::analysis::keywords::{extract_job_keywords, keyword_match, JOB_KEYWORD_LIMIT};
use crate::analysis::ranking::RankedResumes;
use crate::analysis::readability::{readability_scores, Readability};
use crate::analysis::scoring::relevance_score;
use crate::analysis::skills::extract_skills;
use crate::analysis::structure::{contact_info_checks, format_structure_checks, ContactInfo};
use crate::analysis::vocabulary::Vocabulary;
use crate::enrichment::llm::{critique_resume, InsightOutcome};
use crate::enrichment::truncate_chars;
use crate::enrichment::vectors::{SimilarityMatches, VectorStore};
use crate::llm_client::LlmClient;

/// Characters of resume text sent to the embedding store.
const EMBED_SNIPPET_CHARS: usize = 2000;
/// Number of neighbors requested in the similarity lookup.
const SIMILARITY_TOP_K: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A resume that made it through upload and text extraction.
#[derive(Debug, Clone)]
pub struct ExtractedResume {
    pub original_name: String,
    pub stored_name: String,
    pub text: String,
}

/// Every deterministic signal extracted from one resume against one job.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeFeatures {
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub keyword_score: u32,
    pub skills_found: Vec<String>,
    pub years_of_experience: u32,
    pub education: Education,
    pub format_issues: Vec<String>,
    pub contact: ContactInfo,
    pub readability: Readability,
    pub achievements: Vec<String>,
    pub generic_phrases: Vec<String>,
    pub weak_verbs: Vec<String>,
    pub relevance_score: u32,
}

/// One resume's full scoring report, enrichment included.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeReport {
    pub id: Uuid,
    pub original_name: String,
    pub stored_name: String,
    #[serde(flatten)]
    pub features: ResumeFeatures,
    pub insight: InsightOutcome,
}

/// Output of a full scoring run over one job and a batch of resumes.
#[derive(Debug, Clone)]
pub struct ScoringOutcome {
    pub ranked: RankedResumes,
    pub similarity: SimilarityMatches,
}

// ────────────────────────────────────────────────────────────────────────────
// Feature extraction
// ────────────────────────────────────────────────────────────────────────────

/// Runs every extractor over one resume text and aggregates the relevance
/// score. Pure: same text and keywords always produce the same features.
pub fn analyze_resume_text(
    text: &str,
    job_keywords: &[String],
    vocab: &Vocabulary,
) -> ResumeFeatures {
    let keyword = keyword_match(text, job_keywords);
    let skills_found = extract_skills(text, &vocab.skills);
    let years = years_of_experience(text);
    let education = detect_education(text, &vocab.degrees);
    let format_issues = format_structure_checks(text, &vocab.expected_sections);
    let contact = contact_info_checks(text);
    let readability = readability_scores(text);
    let achievements = detect_achievements(text);
    let generic_phrases = scan_phrases(text, &vocab.generic_phrases);
    let weak_verbs = scan_phrases(text, &vocab.weak_verbs);

    let relevance = relevance_score(keyword.score, skills_found.len(), achievements.len(), years);

    ResumeFeatures {
        matched_keywords: keyword.matched,
        missing_keywords: keyword.missing,
        keyword_score: keyword.score,
        skills_found,
        years_of_experience: years,
        education,
        format_issues,
        contact,
        readability,
        achievements,
        generic_phrases,
        weak_verbs,
        relevance_score: relevance,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Scores a batch of resumes against one job description.
///
/// Steps:
/// 1. extract_job_keywords() once for the whole batch
/// 2. per resume: analyze_resume_text() → ResumeFeatures
/// 3. per resume: store embedding snippet (best-effort, logged on failure)
/// 4. per resume: LLM critique (best-effort, downgraded outcome on failure)
/// 5. RankedResumes::rank() — stable sort, relevance desc
/// 6. similarity lookup with the top-ranked resume's text
pub async fn score_resumes(
    vocab: &Vocabulary,
    llm: Option<&LlmClient>,
    vectors: Option<&dyn VectorStore>,
    job_text: &str,
    resumes: Vec<ExtractedResume>,
) -> ScoringOutcome {
    // Step 1: Job keywords, shared by every resume in the batch
    let job_keywords = extract_job_keywords(job_text, JOB_KEYWORD_LIMIT, &vocab.stop_words);

    let mut reports = Vec::with_capacity(resumes.len());
    let mut texts: HashMap<String, String> = HashMap::with_capacity(resumes.len());

    for resume in resumes {
        let id = Uuid::new_v4();

        // Step 2: Deterministic features
        let features = analyze_resume_text(&resume.text, &job_keywords, vocab);

        // Step 3: Embedding store, best-effort, keyed by the record id
        if let Some(store) = vectors {
            let snippet = embed_snippet(&resume.text);
            if let Err(err) = store
                .embed_and_store(&id.to_string(), snippet, &resume.original_name)
                .await
            {
                warn!("Embedding store failed for {}: {err:#}", resume.original_name);
            }
        }

        // Step 4: LLM critique, best-effort
        let insight = match llm {
            Some(client) => critique_resume(client, &resume.text, job_text).await,
            None => InsightOutcome::unavailable("LLM analysis disabled."),
        };

        texts.insert(resume.stored_name.clone(), resume.text);
        reports.push(ResumeReport {
            id,
            original_name: resume.original_name,
            stored_name: resume.stored_name,
            features,
            insight,
        });
    }

    // Step 5: Rank
    let ranked = RankedResumes::rank(reports);

    // Step 6: Similarity lookup seeded with the top-ranked resume's text
    let similarity = match (vectors, ranked.all().first()) {
        (Some(store), Some(best)) => {
            let best_text = texts.get(&best.stored_name).map(String::as_str).unwrap_or("");
            match store.find_similar(best_text, SIMILARITY_TOP_K).await {
                Ok(matches) => matches,
                Err(err) => {
                    warn!("Similarity lookup failed: {err:#}");
                    SimilarityMatches::default()
                }
            }
        }
        _ => SimilarityMatches::default(),
    };

    ScoringOutcome { ranked, similarity }
}

/// First `EMBED_SNIPPET_CHARS` characters of the text, or a single space so
/// the embedding upstream never sees an empty input.
fn embed_snippet(text: &str) -> &str {
    if text.is_empty() {
        " "
    } else {
        truncate_chars(text, EMBED_SNIPPET_CHARS)
    }
}
