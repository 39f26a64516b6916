//! PDF text extraction.
//!
//! Extraction is lossy by nature; an empty or garbled result is valid input
//! for the analysis layer, never an error there. Extraction is CPU-bound,
//! so async callers run it via `tokio::task::spawn_blocking`.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

static BLANK_RUNS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Extracts text from in-memory PDF bytes and normalizes blank-line runs.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .context("failed to extract text from PDF bytes")?;
    Ok(normalize_whitespace(&raw))
}

/// Collapses runs of blank lines to a single blank line and trims the ends.
fn normalize_whitespace(text: &str) -> String {
    BLANK_RUNS_RE.replace_all(text, "\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_runs_collapse_to_one_blank_line() {
        assert_eq!(normalize_whitespace("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_blank_lines_with_spaces_also_collapse() {
        assert_eq!(normalize_whitespace("a\n  \t\nb"), "a\n\nb");
    }

    #[test]
    fn test_single_newlines_untouched() {
        assert_eq!(normalize_whitespace("a\nb\nc"), "a\nb\nc");
    }

    #[test]
    fn test_ends_trimmed() {
        assert_eq!(normalize_whitespace("\n\n  body  \n\n"), "body");
    }

    #[test]
    fn test_garbage_bytes_error_not_panic() {
        assert!(extract_text(b"not a pdf").is_err());
    }
}
