//! Running byte total shared between a transfer and its reporter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Thread-safe, monotonic count of the bytes seen so far for one transfer.
///
/// Clones share the same total. The transfer task is the only writer; any
/// number of readers may take snapshots concurrently.
#[derive(Debug, Clone, Default)]
pub struct ByteCounter {
    total: Arc<AtomicU64>,
}

impl ByteCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` bytes to the total.
    pub fn add(&self, n: u64) {
        self.total.fetch_add(n, Ordering::AcqRel);
    }

    /// Returns the current total.
    pub fn snapshot(&self) -> u64 {
        self.total.load(Ordering::Acquire)
    }
}
