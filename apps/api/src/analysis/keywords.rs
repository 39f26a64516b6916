//! Job-keyword extraction and resume keyword matching.
//!
//! Both sides share one token pattern: runs of two or more ASCII letters plus
//! `+ # . -`, anchored on word boundaries, over lowercased text. Extraction
//! ranks tokens by raw frequency (no TF-IDF, simplicity is the contract) with
//! ties resolved by first appearance; matching partitions the job keywords
//! into matched/missing in job order and floors the percentage score.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shared token pattern. Word boundaries mean a token must start and end on
/// a word character, so `c++` or `c#` never survive tokenization on their
/// own; the skill bank covers those separately.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z+#.\-]{2,}\b").unwrap());

/// Keywords the scoring pipeline draws from a job description.
pub const JOB_KEYWORD_LIMIT: usize = 40;

/// Outcome of matching one resume against a job keyword list.
///
/// `matched` and `missing` partition the keyword list: together they cover
/// every job keyword, they never overlap, and both preserve job order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// Percentage (0-100) of job keywords present in the resume, floored.
    pub score: u32,
}

/// Lowercases and tokenizes free text with the shared pattern.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts up to `top_n` keywords from a job description, ranked by
/// descending frequency. Stop words and digit-only tokens are dropped.
/// Equal frequencies keep first-encountered order.
pub fn extract_job_keywords(
    job_text: &str,
    top_n: usize,
    stop_words: &HashSet<String>,
) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in tokenize(job_text) {
        if stop_words.contains(&token) || token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        counts
            .entry(token.clone())
            .and_modify(|c| *c += 1)
            .or_insert_with(|| {
                order.push(token);
                1
            });
    }

    // Vec::sort_by is stable, so ties keep their first-encounter position.
    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|t| {
            let count = counts[&t];
            (t, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked.into_iter().take(top_n).map(|(t, _)| t).collect()
}

/// Partitions `job_keywords` by literal presence in the resume token set and
/// scores the overlap as a floored percentage.
pub fn keyword_match(resume_text: &str, job_keywords: &[String]) -> KeywordMatch {
    let resume_tokens: HashSet<String> = tokenize(resume_text).into_iter().collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for keyword in job_keywords {
        if resume_tokens.contains(keyword) {
            matched.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }

    let score = (matched.len() * 100 / job_keywords.len().max(1)) as u32;

    KeywordMatch {
        matched,
        missing,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::vocabulary::Vocabulary;

    fn stop_words() -> HashSet<String> {
        Vocabulary::default().stop_words
    }

    fn keywords(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_keeps_compound_tokens() {
        let tokens = tokenize("Built node.js services and CI-CD pipelines");
        assert!(tokens.contains(&"node.js".to_string()));
        assert!(tokens.contains(&"ci-cd".to_string()));
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        let tokens = tokenize("a b cd");
        assert_eq!(tokens, vec!["cd"]);
    }

    #[test]
    fn test_extract_ranks_by_frequency() {
        let text = "python python python docker docker react";
        let kws = extract_job_keywords(text, 10, &stop_words());
        assert_eq!(kws, vec!["python", "docker", "react"]);
    }

    #[test]
    fn test_extract_breaks_ties_by_first_appearance() {
        let text = "terraform ansible terraform ansible jenkins";
        let kws = extract_job_keywords(text, 10, &stop_words());
        assert_eq!(kws, vec!["terraform", "ansible", "jenkins"]);
    }

    #[test]
    fn test_extract_respects_top_n() {
        let text = "one two three four five six seven eight";
        let kws = extract_job_keywords(text, 3, &stop_words());
        assert_eq!(kws.len(), 3);
    }

    #[test]
    fn test_extract_drops_stop_words() {
        let text = "experience with python and the usual tooling for teams";
        let kws = extract_job_keywords(text, 10, &stop_words());
        assert!(!kws.contains(&"with".to_string()));
        assert!(!kws.contains(&"and".to_string()));
        assert!(!kws.contains(&"the".to_string()));
        assert!(!kws.contains(&"for".to_string()));
        assert!(kws.contains(&"python".to_string()));
    }

    #[test]
    fn test_extract_empty_text() {
        assert!(extract_job_keywords("", 10, &stop_words()).is_empty());
    }

    #[test]
    fn test_extract_is_deterministic() {
        let text = "rust tokio rust axum serde tokio rust";
        let first = extract_job_keywords(text, 5, &stop_words());
        let second = extract_job_keywords(text, 5, &stop_words());
        assert_eq!(first, second);
    }

    #[test]
    fn test_match_partitions_keywords() {
        let kws = keywords(&["python", "docker", "terraform"]);
        let result = keyword_match("I ship python services in docker containers", &kws);
        assert_eq!(result.matched, vec!["python", "docker"]);
        assert_eq!(result.missing, vec!["terraform"]);

        let mut union: Vec<String> = result.matched.clone();
        union.extend(result.missing.clone());
        union.sort();
        let mut expected: Vec<String> = kws.clone();
        expected.sort();
        assert_eq!(union, expected);
    }

    #[test]
    fn test_match_preserves_job_order() {
        let kws = keywords(&["zookeeper", "airflow", "spark"]);
        let result = keyword_match("spark and airflow and zookeeper", &kws);
        assert_eq!(result.matched, vec!["zookeeper", "airflow", "spark"]);
    }

    #[test]
    fn test_match_score_floors() {
        let kws = keywords(&["rust", "tokio", "axum"]);
        let result = keyword_match("rust and tokio", &kws);
        // 2 of 3 = 66.66..., floored to 66
        assert_eq!(result.score, 66);
    }

    #[test]
    fn test_match_empty_keywords_scores_zero() {
        let result = keyword_match("anything at all", &[]);
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_match_empty_resume_misses_everything() {
        let kws = keywords(&["python", "sql"]);
        let result = keyword_match("", &kws);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, kws);
        assert_eq!(result.score, 0);
    }
}
