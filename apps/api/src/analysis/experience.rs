//! Experience and education heuristics.
//!
//! Years of experience prefers a span between the earliest and latest
//! 4-digit years in the text; failing that it falls back to explicit
//! "N years" phrasing. Education detection is containment over degree labels
//! plus capture of institution-looking snippets.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:20|19)\d{2}").unwrap());

static YEARS_PHRASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\+?\s+years?").unwrap());

/// Second-chance pattern, applied only when everything else produced 0.
static YEARS_PHRASE_LOOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+years?").unwrap());

static INSTITUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:university|college|institute|school|academy)[\s,\w\-]{0,60}").unwrap()
});

/// How many institution snippets are worth reporting.
const MAX_INSTITUTIONS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    /// Degree labels found in the text, deduplicated.
    pub degrees: Vec<String>,
    /// Up to five institution snippets (indicator word plus trailing
    /// context), in document order with original casing.
    pub institutions: Vec<String>,
}

/// Estimates years of experience from the resume text.
pub fn years_of_experience(text: &str) -> u32 {
    let years: Vec<u32> = YEAR_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    let lowered = text.to_lowercase();

    let mut result = if years.len() >= 2 {
        let max = years.iter().max().copied().unwrap_or(0);
        let min = years.iter().min().copied().unwrap_or(0);
        max.saturating_sub(min)
    } else {
        capture_number(&YEARS_PHRASE_RE, &lowered)
    };

    if result == 0 {
        result = capture_number(&YEARS_PHRASE_LOOSE_RE, &lowered);
    }

    result
}

fn capture_number(pattern: &Regex, lowered: &str) -> u32 {
    pattern
        .captures(lowered)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Finds degree labels and institution snippets.
pub fn detect_education(text: &str, degree_labels: &[String]) -> Education {
    let lowered = text.to_lowercase();

    let degrees: Vec<String> = degree_labels
        .iter()
        .filter(|label| lowered.contains(label.as_str()))
        .cloned()
        .collect();

    // The institution pattern runs over the raw text so snippets keep
    // their original casing.
    let institutions: Vec<String> = INSTITUTION_RE
        .find_iter(text)
        .take(MAX_INSTITUTIONS)
        .map(|m| m.as_str().to_string())
        .collect();

    Education {
        degrees,
        institutions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::vocabulary::Vocabulary;

    #[test]
    fn test_year_span() {
        assert_eq!(
            years_of_experience("Software Engineer, Acme (2015) through Initech (2020)"),
            5
        );
    }

    #[test]
    fn test_year_span_ignores_document_order() {
        assert_eq!(years_of_experience("2020 role, earlier 2012 role"), 8);
    }

    #[test]
    fn test_year_span_nineties() {
        assert_eq!(years_of_experience("From 1998 until 2003"), 5);
    }

    #[test]
    fn test_phrase_fallback_without_dates() {
        assert_eq!(
            years_of_experience("5 years of experience in backend development"),
            5
        );
    }

    #[test]
    fn test_phrase_fallback_with_plus() {
        assert_eq!(
            years_of_experience("Joined in 2019. 7+ years shipping software."),
            7
        );
    }

    #[test]
    fn test_loose_fallback_after_zero_span() {
        // Two identical years make a zero span; the loose phrase rescues it.
        assert_eq!(
            years_of_experience("Intern 2020, returned 2020, 3 years total"),
            3
        );
    }

    #[test]
    fn test_no_signal_is_zero() {
        assert_eq!(years_of_experience("No numbers to be found here"), 0);
        assert_eq!(years_of_experience(""), 0);
    }

    #[test]
    fn test_degrees_found_in_vocabulary_order() {
        let vocab = Vocabulary::default();
        let education = detect_education("Holds an MBA and a PhD in something", &vocab.degrees);
        assert_eq!(education.degrees, vec!["phd", "mba"]);
    }

    #[test]
    fn test_degrees_deduplicated() {
        let vocab = Vocabulary::default();
        let education = detect_education(
            "Bachelor of Arts, then another bachelor degree",
            &vocab.degrees,
        );
        assert_eq!(education.degrees, vec!["bachelor"]);
    }

    #[test]
    fn test_institution_snippet_keeps_casing_and_context() {
        let vocab = Vocabulary::default();
        let education = detect_education(
            "Studied at University of Somewhere, Dept of Computing.",
            &vocab.degrees,
        );
        assert_eq!(education.institutions.len(), 1);
        assert!(education.institutions[0].starts_with("University of Somewhere"));
    }

    #[test]
    fn test_institutions_capped_at_five() {
        let vocab = Vocabulary::default();
        let text = "College A. College B. College C. College D. College E. College F.";
        let education = detect_education(text, &vocab.degrees);
        assert_eq!(education.institutions.len(), 5);
    }

    #[test]
    fn test_empty_text_education() {
        let vocab = Vocabulary::default();
        let education = detect_education("", &vocab.degrees);
        assert!(education.degrees.is_empty());
        assert!(education.institutions.is_empty());
    }
}
