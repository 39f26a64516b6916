//! Format sanity checks and contact-info extraction.
//!
//! Warning order is part of the contract: long lines, then bullet count,
//! then missing sections. Callers display the strings verbatim.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+?\d[\d\-\s]{7,}\d").unwrap());

static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/[A-Za-z0-9\-_/]+").unwrap());

/// Average line length above this suggests merged columns or tables.
const LONG_LINE_THRESHOLD: f64 = 200.0;
/// Resumes with fewer bulleted lines than this get a phrasing nudge.
const MIN_BULLET_LINES: usize = 3;
/// At most this many missing section names are spelled out in the warning.
const MISSING_SECTIONS_NAMED: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub linkedin: Option<String>,
}

/// Runs the fixed format checks, in order, returning display-ready warnings.
pub fn format_structure_checks(text: &str, expected_sections: &[String]) -> Vec<String> {
    let mut warnings = Vec::new();

    let lines: Vec<&str> = text.lines().collect();
    let total_chars: usize = lines.iter().map(|l| l.chars().count()).sum();
    let avg_line_len = total_chars as f64 / lines.len().max(1) as f64;
    if avg_line_len > LONG_LINE_THRESHOLD {
        warnings.push(
            "Long lines detected; tables or multi-column layout may have corrupted text extraction."
                .to_string(),
        );
    }

    let bullet_lines = lines
        .iter()
        .filter(|l| l.trim_start().starts_with(['*', '-', '\u{2022}']))
        .count();
    if bullet_lines < MIN_BULLET_LINES {
        warnings
            .push("Few bulleted lines found. Use bullets to make achievements scannable.".to_string());
    }

    let lowered = text.to_lowercase();
    let missing: Vec<&str> = expected_sections
        .iter()
        .filter(|s| !lowered.contains(s.as_str()))
        .map(|s| s.as_str())
        .collect();
    if !missing.is_empty() {
        let named = &missing[..missing.len().min(MISSING_SECTIONS_NAMED)];
        warnings.push(format!("Missing common sections: {}.", named.join(", ")));
    }

    warnings
}

/// Pulls emails, phone numbers, and the first LinkedIn URL out of the text.
/// Original casing is preserved; matches come back in document order.
pub fn contact_info_checks(text: &str) -> ContactInfo {
    let emails = EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let phones = PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let linkedin = LINKEDIN_RE.find(text).map(|m| m.as_str().to_string());

    ContactInfo {
        emails,
        phones,
        linkedin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::vocabulary::Vocabulary;

    fn sections() -> Vec<String> {
        Vocabulary::default().expected_sections
    }

    /// A minimal resume that passes every structural check.
    fn clean_resume() -> String {
        [
            "Summary",
            "Experience",
            "- Shipped the billing service",
            "- Cut deploy time in half",
            "- Mentored two interns",
            "Projects",
            "Education",
            "Skills",
        ]
        .join("\n")
    }

    #[test]
    fn test_clean_resume_has_no_warnings() {
        let warnings = format_structure_checks(&clean_resume(), &sections());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn test_long_lines_flagged_first() {
        let long = "x".repeat(500);
        let warnings = format_structure_checks(&long, &sections());
        assert!(warnings[0].contains("Long lines"));
    }

    #[test]
    fn test_few_bullets_flagged() {
        let text = "Experience\nEducation\nSkills\nSummary\nProjects\n- only one bullet";
        let warnings = format_structure_checks(text, &sections());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("bullet"));
    }

    #[test]
    fn test_bullet_markers_accepted() {
        let text = "experience education skills summary projects\n* a\n\u{2022} b\n  - c";
        let warnings = format_structure_checks(text, &sections());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_sections_names_at_most_three() {
        let warnings = format_structure_checks("- a\n- b\n- c", &sections());
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0],
            "Missing common sections: experience, education, skills."
        );
    }

    #[test]
    fn test_empty_text_warns_on_bullets_and_sections() {
        let warnings = format_structure_checks("", &sections());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("bullet"));
        assert!(warnings[1].contains("Missing common sections"));
    }

    #[test]
    fn test_contact_extraction() {
        let text = "Jane Doe\njane.doe+hr@mail.example.com\n+1 555-867-5309\nlinkedin.com/in/jane-doe";
        let contact = contact_info_checks(text);
        assert_eq!(contact.emails, vec!["jane.doe+hr@mail.example.com"]);
        assert_eq!(contact.phones, vec!["+1 555-867-5309"]);
        assert_eq!(contact.linkedin.as_deref(), Some("linkedin.com/in/jane-doe"));
    }

    #[test]
    fn test_contact_first_linkedin_wins() {
        let text = "see LinkedIn.com/in/first and linkedin.com/in/second";
        let contact = contact_info_checks(text);
        assert_eq!(contact.linkedin.as_deref(), Some("LinkedIn.com/in/first"));
    }

    #[test]
    fn test_contact_empty_text() {
        let contact = contact_info_checks("");
        assert!(contact.emails.is_empty());
        assert!(contact.phones.is_empty());
        assert!(contact.linkedin.is_none());
    }
}
