//! Ranking over scored resumes.
//!
//! Sorting is stable and descending on relevance, so resumes with equal
//! scores keep their upload order. Selections are views into the ranked
//! list, never copies, and the requested count is clamped rather than
//! rejected.

use crate::analysis::pipeline::ResumeReport;

/// Scored resumes in descending relevance order.
#[derive(Debug, Clone)]
pub struct RankedResumes {
    items: Vec<ResumeReport>,
}

impl RankedResumes {
    /// Sorts the reports by relevance, highest first. Equal scores keep
    /// their input order.
    pub fn rank(mut items: Vec<ResumeReport>) -> Self {
        items.sort_by(|a, b| b.features.relevance_score.cmp(&a.features.relevance_score));
        Self { items }
    }

    pub fn all(&self) -> &[ResumeReport] {
        &self.items
    }

    /// The top `n` reports, with `n` clamped to `1..=len`. Empty input
    /// yields an empty slice.
    pub fn top(&self, n: usize) -> &[ResumeReport] {
        let count = self.clamp_count(n);
        &self.items[..count]
    }

    /// The head-to-head comparison pair: the top two reports, or fewer
    /// when fewer exist.
    pub fn top_two(&self) -> &[ResumeReport] {
        &self.items[..self.items.len().min(2)]
    }

    /// Clamps a requested selection size to `1..=len` (0 when empty).
    pub fn clamp_count(&self, n: usize) -> usize {
        n.max(1).min(self.items.len())
    }

    pub fn into_vec(self) -> Vec<ResumeReport> {
        self.items
    }
}
