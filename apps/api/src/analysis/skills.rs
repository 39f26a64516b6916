//! Skill detection over extracted resume text.
//!
//! Two phases, results unioned:
//! 1. containment: the lowercase skill label appears in the lowercase text,
//!    not embedded in a longer alphanumeric run (so "pythonic" alone never
//!    yields `python`, while "machine learning", "c++" and "node.js" still
//!    match as written);
//! 2. fuzzy: every token is scored against the label on a 0-100 similarity
//!    scale and the skill counts when the best token scores strictly above
//!    90. Catches near-miss spellings the containment phase cannot.
//!
//! The threshold and scale are inherited scoring behavior; do not tune.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Fuzzy-phase token pattern. Narrower than the keyword pattern (no `#`);
/// the asymmetry is inherited and kept.
static FUZZY_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z+.\-]{2,}\b").unwrap());

/// A skill is included when its best token similarity strictly exceeds this.
const FUZZY_THRESHOLD: u32 = 90;

/// Levenshtein similarity on the 0-100 integer scale.
pub(crate) fn similarity(a: &str, b: &str) -> u32 {
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u32
}

/// True when `needle` occurs in `haystack` with no alphanumeric character
/// flanking the occurrence. `needle` is a bank label (lowercase ASCII), so
/// the +1 advance below stays on a char boundary.
fn contains_standalone(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let begin = from + pos;
        let end = begin + needle.len();
        let clear_before = haystack[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let clear_after = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if clear_before && clear_after {
            return true;
        }
        from = begin + 1;
    }
    false
}

/// Detects which bank skills the resume mentions. Deduplicated and
/// alphabetically sorted; deterministic for a fixed bank.
pub fn extract_skills(resume_text: &str, skill_bank: &[String]) -> Vec<String> {
    let lowered = resume_text.to_lowercase();
    let mut found: BTreeSet<String> = BTreeSet::new();

    for skill in skill_bank {
        if contains_standalone(&lowered, skill) {
            found.insert(skill.clone());
        }
    }

    let tokens: Vec<&str> = FUZZY_TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .collect();
    if !tokens.is_empty() {
        for skill in skill_bank {
            if found.contains(skill) {
                continue;
            }
            let best = tokens
                .iter()
                .map(|t| similarity(skill, t))
                .max()
                .unwrap_or(0);
            if best > FUZZY_THRESHOLD {
                found.insert(skill.clone());
            }
        }
    }

    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_containment_finds_plain_skills() {
        let skills = extract_skills(
            "Experienced with Docker and Kubernetes in production",
            &bank(&["docker", "kubernetes", "terraform"]),
        );
        assert_eq!(skills, vec!["docker", "kubernetes"]);
    }

    #[test]
    fn test_containment_finds_multiword_skills() {
        let skills = extract_skills(
            "Built machine learning pipelines end to end",
            &bank(&["machine learning", "nlp"]),
        );
        assert_eq!(skills, vec!["machine learning"]);
    }

    #[test]
    fn test_containment_finds_symbol_skills() {
        let skills = extract_skills(
            "Wrote C++ services, styled with CSS, deployed via CI/CD",
            &bank(&["c++", "css", "ci/cd"]),
        );
        assert_eq!(skills, vec!["c++", "ci/cd", "css"]);
    }

    #[test]
    fn test_embedded_occurrence_does_not_count() {
        // "pythonic" contains the label but only as part of a longer word,
        // and its best fuzzy score (75) is under the threshold.
        let skills = extract_skills("pythonic wizardry", &bank(&["python"]));
        assert!(skills.is_empty(), "got {skills:?}");
    }

    #[test]
    fn test_short_label_not_found_inside_words() {
        let skills = extract_skills("google golang enthusiasts", &bank(&["go"]));
        assert!(skills.is_empty());
    }

    #[test]
    fn test_short_label_found_standalone() {
        let skills = extract_skills("We use Go.", &bank(&["go"]));
        assert_eq!(skills, vec!["go"]);
    }

    #[test]
    fn test_fuzzy_similarity_scale() {
        assert_eq!(similarity("python", "pythonic"), 75);
        assert_eq!(similarity("kubernetes", "kuberneted"), 90);
        assert_eq!(similarity("javascript", "javascripts"), 91);
    }

    #[test]
    fn test_fuzzy_threshold_excludes_score_90() {
        // Best token scores exactly 90: strictly-greater threshold excludes it.
        let skills = extract_skills("kuberneted clusters", &bank(&["kubernetes"]));
        assert!(skills.is_empty());
    }

    #[test]
    fn test_fuzzy_threshold_includes_score_91() {
        let skills = extract_skills("javascripts everywhere", &bank(&["javascript"]));
        assert_eq!(skills, vec!["javascript"]);
    }

    #[test]
    fn test_results_sorted_and_deduplicated() {
        let skills = extract_skills(
            "sql, python, sql again, aws",
            &bank(&["sql", "python", "aws"]),
        );
        assert_eq!(skills, vec!["aws", "python", "sql"]);
    }

    #[test]
    fn test_empty_text_yields_no_skills() {
        let skills = extract_skills("", &bank(&["python", "sql"]));
        assert!(skills.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "python aws terraform javascripts";
        let b = bank(&["python", "aws", "terraform", "javascript"]);
        assert_eq!(extract_skills(text, &b), extract_skills(text, &b));
    }
}
