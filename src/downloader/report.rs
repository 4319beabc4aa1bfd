//! Aggregated outcome of a batch.

use crate::transfer::Summary;

/// One [`Summary`] per submitted job, in submission order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    summaries: Vec<Summary>,
}

impl Report {
    /// Build a report, ordering `summaries` by job position.
    pub fn new(mut summaries: Vec<Summary>) -> Self {
        summaries.sort_by_key(Summary::id);
        Self { summaries }
    }

    pub fn summaries(&self) -> &[Summary] {
        &self.summaries
    }

    pub fn into_summaries(self) -> Vec<Summary> {
        self.summaries
    }

    /// Transfers that ended in failure.
    pub fn failures(&self) -> impl Iterator<Item = &Summary> {
        self.summaries.iter().filter(|s| !s.is_success())
    }

    /// Transfers that completed.
    pub fn succeeded(&self) -> impl Iterator<Item = &Summary> {
        self.summaries.iter().filter(|s| s.is_success())
    }

    /// `true` when no transfer failed.
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}
