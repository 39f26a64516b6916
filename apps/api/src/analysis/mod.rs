// Deterministic resume scoring core.
// Implements: keyword matching, skill/experience/education extraction,
// structure and readability checks, relevance aggregation, ranking.
// Everything except handlers and the pipeline entrypoint is pure.

pub mod achievements;
pub mod experience;
pub mod handlers;
pub mod keywords;
pub mod pipeline;
pub mod ranking;
pub mod readability;
pub mod scoring;
pub mod skills;
pub mod structure;
pub mod vocabulary;
