//! Rough readability signals.
//!
//! The estimate is a labeled approximation, not textbook Flesch-Kincaid:
//! it feeds the fixed coefficients with average words per sentence and
//! average characters per word. The coefficients are inherited scoring
//! behavior and stay as-is.

use serde::{Deserialize, Serialize};

const FLESCH_BASE: f64 = 206.835;
const SENTENCE_LENGTH_COEFF: f64 = 1.015;
const WORD_LENGTH_COEFF: f64 = 84.6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Readability {
    pub avg_words_per_sentence: f64,
    /// Clamped to >= 0 and truncated; None when the text has no words.
    pub flesch_estimate: Option<i32>,
}

/// Computes both readability signals in one pass over the text.
pub fn readability_scores(text: &str) -> Readability {
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();
    let word_count = words.len();

    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);

    let avg_words_per_sentence = word_count as f64 / sentence_count as f64;

    let flesch_estimate = if word_count == 0 {
        None
    } else {
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        let avg_word_len = total_chars as f64 / word_count as f64;
        let raw = FLESCH_BASE
            - SENTENCE_LENGTH_COEFF * avg_words_per_sentence
            - WORD_LENGTH_COEFF * avg_word_len;
        Some(raw.max(0.0) as i32)
    };

    Readability {
        avg_words_per_sentence,
        flesch_estimate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_estimate() {
        let r = readability_scores("");
        assert_eq!(r.avg_words_per_sentence, 0.0);
        assert_eq!(r.flesch_estimate, None);
    }

    #[test]
    fn test_avg_words_per_sentence() {
        let r = readability_scores("Word word word. Word word.");
        assert!((r.avg_words_per_sentence - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_long_words_clamp_to_zero() {
        // avg word length 4 drives the raw estimate far below zero.
        let r = readability_scores("Word word word. Word word.");
        assert_eq!(r.flesch_estimate, Some(0));
    }

    #[test]
    fn test_short_words_score_positive() {
        // 4 words, 1 sentence, 1 char each: 206.835 - 4.06 - 84.6 = 118.175
        let r = readability_scores("a a a a.");
        assert_eq!(r.flesch_estimate, Some(118));
    }

    #[test]
    fn test_punctuation_only_words_ignored() {
        let r = readability_scores("--- ... !!!");
        assert_eq!(r.flesch_estimate, None);
        assert_eq!(r.avg_words_per_sentence, 0.0);
    }

    #[test]
    fn test_deterministic() {
        let text = "Shipped search. Cut latency by half. Mentored interns.";
        let a = readability_scores(text);
        let b = readability_scores(text);
        assert_eq!(a.avg_words_per_sentence, b.avg_words_per_sentence);
        assert_eq!(a.flesch_estimate, b.flesch_estimate);
    }
}
