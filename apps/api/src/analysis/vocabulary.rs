//! Fixed vocabularies behind the deterministic extractors.
//!
//! These lists are inherited scoring behavior: changing an entry changes
//! scores for every caller, so they are compiled in as constants and carried
//! through `Vocabulary`, which handlers share via `AppState` and tests build
//! directly. No extractor reads vocabulary from hidden module state.

use std::collections::HashSet;

/// Skill bank scanned by both detection phases (containment + fuzzy).
/// Labels are lowercase; matching lowercases the text, never the bank.
const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "sql",
    "javascript",
    "react",
    "node.js",
    "aws",
    "docker",
    "kubernetes",
    "machine learning",
    "nlp",
    "data analysis",
    "excel",
    "project management",
    "github",
    "communication",
    "leadership",
    "problem solving",
    "time management",
    "teamwork",
    "c++",
    "c#",
    "go",
    "ruby",
    "html",
    "css",
    "typescript",
    "angular",
    "vue.js",
    "django",
    "flask",
    "spring",
    "hibernate",
    "rest api",
    "graphql",
    "linux",
    "windows",
    "azure",
    "gcp",
    "ci/cd",
    "jenkins",
    "terraform",
    "ansible",
    "puppet",
    "salesforce",
    "marketing",
    "seo",
    "content creation",
    "social media management",
];

/// Tokens dropped from job-keyword extraction before frequency counting.
const STOP_WORDS: &[&str] = &[
    "the", "and", "with", "for", "using", "in", "to", "of", "a", "an", "as", "on", "by", "or",
];

/// Degree labels matched by lowercase containment.
const DEGREE_LABELS: &[&str] = &[
    "bachelor", "master", "phd", "b.sc", "m.sc", "b.s.", "m.s.", "mba",
];

/// Verbs that signal weak ownership in bullet phrasing.
const WEAK_VERBS: &[&str] = &[
    "helped",
    "worked on",
    "responsible for",
    "assisted",
    "involved in",
];

/// Filler phrases recruiters skim past.
const GENERIC_PHRASES: &[&str] = &[
    "hardworking",
    "team player",
    "results-driven",
    "detail-oriented",
    "excellent communication skills",
    "responsible for",
    "experienced in",
];

/// Section names a resume is expected to carry somewhere in its text.
const EXPECTED_SECTIONS: &[&str] = &["experience", "education", "skills", "summary", "projects"];

/// One bundle of every fixed list the extractors consume.
///
/// `Default` yields the production vocabularies; tests may construct a
/// narrowed instance to pin down a single behavior.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub skills: Vec<String>,
    pub stop_words: HashSet<String>,
    pub degrees: Vec<String>,
    pub weak_verbs: Vec<String>,
    pub generic_phrases: Vec<String>,
    pub expected_sections: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            skills: owned(DEFAULT_SKILLS),
            stop_words: STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            degrees: owned(DEGREE_LABELS),
            weak_verbs: owned(WEAK_VERBS),
            generic_phrases: owned(GENERIC_PHRASES),
            expected_sections: owned(EXPECTED_SECTIONS),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
