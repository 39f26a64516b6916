//! Achievement, weak-verb, and generic-phrase detection.

use std::sync::LazyLock;

use regex::Regex;

/// A line is an achievement when it carries a percentage, a dollar figure,
/// or one of the outcome verbs.
static ACHIEVEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+%|\$\d+|\d+\s+%|\bincreased\b|\breduced\b|\bsaved\b|\bgrew\b)").unwrap()
});

/// Reporting more than this many achievement lines stops being useful.
const MAX_ACHIEVEMENTS: usize = 20;

/// Collects trimmed achievement lines in document order, capped at 20.
pub fn detect_achievements(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| ACHIEVEMENT_RE.is_match(&line.to_lowercase()))
        .map(|line| line.trim().to_string())
        .take(MAX_ACHIEVEMENTS)
        .collect()
}

/// Returns the vocabulary entries contained in the lowercased text, in
/// vocabulary order. Used for both weak verbs and generic phrases.
pub fn scan_phrases(text: &str, vocabulary: &[String]) -> Vec<String> {
    let lowered = text.to_lowercase();
    vocabulary
        .iter()
        .filter(|phrase| lowered.contains(phrase.as_str()))
        .cloned()
        .collect()
}
