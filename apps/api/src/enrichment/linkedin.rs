//! LinkedIn profile fetch and review.
//!
//! LinkedIn blocks most automated fetches, so every step degrades: a
//! non-200 page or a transport failure becomes an error marker the client
//! can show, never a request failure. Parsing happens in a sync scope so
//! the document never lives across an await.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::enrichment::prompts::{PROFILE_PROMPT_TEMPLATE, PROFILE_SYSTEM};
use crate::llm_client::{strip_json_fences, LlmClient};

const PROFILE_MAX_TOKENS: u32 = 400;
const FETCH_TIMEOUT_SECS: u64 = 10;
/// Browser-like agent; LinkedIn rejects the default reqwest agent outright.
const PROFILE_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0 Safari/537.36";

/// Paragraphs used when no About section is found.
const FALLBACK_PARAGRAPHS: usize = 3;
/// Minimum characters for a paragraph to count as profile content.
const FALLBACK_MIN_CHARS: usize = 80;

/// Structured review of a public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInsight {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub quick_recommendation: String,
}

/// What a profile review attempt actually produced.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProfileOutcome {
    Structured(ProfileInsight),
    Raw { raw: String },
    Failed { error: String },
}

impl ProfileOutcome {
    fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            error: message.into(),
        }
    }
}

/// Fetches a public LinkedIn profile and asks the LLM to review it.
/// Never fails: blocked fetches and LLM problems become `Failed` or `Raw`
/// outcomes.
pub async fn analyze_profile(llm: Option<&LlmClient>, url: &str) -> ProfileOutcome {
    let body = match fetch_profile(url).await {
        Ok(body) => body,
        Err(outcome) => return outcome,
    };

    let (headline, about) = extract_profile_sections(&body);

    let Some(client) = llm else {
        return ProfileOutcome::failed("LLM analysis disabled.");
    };

    let prompt = PROFILE_PROMPT_TEMPLATE
        .replace("{headline}", &headline)
        .replace("{about}", &about);

    let response = match client.call(&prompt, PROFILE_SYSTEM, PROFILE_MAX_TOKENS).await {
        Ok(response) => response,
        Err(err) => {
            warn!("Profile review call failed: {err}");
            return ProfileOutcome::failed("LinkedIn fetch/analysis failed. Try pasting profile text.");
        }
    };

    match response.text() {
        Some(text) => parse_profile_insight(text),
        None => ProfileOutcome::failed("LLM returned empty content"),
    }
}

async fn fetch_profile(url: &str) -> Result<String, ProfileOutcome> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(PROFILE_USER_AGENT)
        .build()
        .map_err(|err| {
            warn!("Profile fetch client build failed: {err}");
            ProfileOutcome::failed(
                "LinkedIn fetch failed. LinkedIn often blocks scrapers; paste the profile text if possible.",
            )
        })?;

    let response = client.get(url).send().await.map_err(|err| {
        warn!("Profile fetch failed: {err}");
        ProfileOutcome::failed(
            "LinkedIn fetch failed. LinkedIn often blocks scrapers; paste the profile text if possible.",
        )
    })?;

    let status = response.status();
    if status.as_u16() != 200 {
        return Err(ProfileOutcome::failed(format!(
            "LinkedIn returned status {}. LinkedIn often blocks automated fetches. Try pasting profile text instead.",
            status.as_u16()
        )));
    }

    response.text().await.map_err(|err| {
        warn!("Profile body read failed: {err}");
        ProfileOutcome::failed(
            "LinkedIn fetch failed. LinkedIn often blocks scrapers; paste the profile text if possible.",
        )
    })
}

/// Pulls (headline, about) out of the profile page.
///
/// Headline is the first `<h1>`. About is the first section or div whose id
/// mentions "about"; when that misses, the first few long paragraphs stand
/// in for it.
fn extract_profile_sections(html: &str) -> (String, String) {
    let document = Html::parse_document(html);

    let h1_selector = Selector::parse("h1").unwrap();
    let about_selector =
        Selector::parse(r#"section[id*="about" i], div[id*="about" i]"#).unwrap();
    let paragraph_selector = Selector::parse("p").unwrap();

    let headline = document
        .select(&h1_selector)
        .next()
        .map(|el| element_text(el, " "))
        .unwrap_or_default();

    let mut about = document
        .select(&about_selector)
        .next()
        .map(|el| element_text(el, " "))
        .unwrap_or_default();

    if about.is_empty() {
        let long_paragraphs: Vec<String> = document
            .select(&paragraph_selector)
            .map(|el| element_text(el, ""))
            .filter(|text| text.chars().count() > FALLBACK_MIN_CHARS)
            .take(FALLBACK_PARAGRAPHS)
            .collect();
        about = long_paragraphs.join("\n");
    }

    (headline, about)
}

fn element_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn parse_profile_insight(text: &str) -> ProfileOutcome {
    match serde_json::from_str::<ProfileInsight>(strip_json_fences(text)) {
        Ok(insight) => ProfileOutcome::Structured(insight),
        Err(err) => {
            warn!("LLM returned non-JSON profile review; keeping raw text: {err}");
            ProfileOutcome::Raw {
                raw: text.to_string(),
            }
        }
    }
}
