//! Progress observations and the sink they are published to.

use crate::transfer::{Status, Transfer};

use std::time::Duration;

/// One observation of a transfer's progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// Position of the transfer in its batch.
    pub id: usize,
    pub label: String,
    pub bytes: u64,
    /// Declared length, `None` while unknown.
    pub total: Option<u64>,
    pub elapsed: Duration,
    pub status: Status,
}

impl ProgressUpdate {
    /// Sample the live state of `transfer`.
    pub fn sample(transfer: &Transfer) -> Self {
        Self {
            id: transfer.id(),
            label: transfer.label().to_string(),
            bytes: transfer.bytes_transferred(),
            total: transfer.declared_length(),
            elapsed: transfer.elapsed(),
            status: transfer.status(),
        }
    }

    /// Completed fraction in `0.0..=1.0`, or `None` for indeterminate progress.
    pub fn fraction(&self) -> Option<f64> {
        self.total.map(|total| match total {
            0 => 1.0,
            total => (self.bytes as f64 / total as f64).min(1.0),
        })
    }

    pub fn is_indeterminate(&self) -> bool {
        self.total.is_none()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Receives progress updates.
///
/// One sink is shared by every reporter of a batch, so implementations must
/// serialize access themselves if the output needs it.
pub trait ProgressSink: Send + Sync {
    fn publish(&self, update: &ProgressUpdate);

    /// Called once after every transfer of a batch has finished.
    fn finish(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(bytes: u64, total: Option<u64>) -> ProgressUpdate {
        ProgressUpdate {
            id: 0,
            label: "file.bin".into(),
            bytes,
            total,
            elapsed: Duration::from_secs(1),
            status: Status::Downloading,
        }
    }

    #[test]
    fn test_fraction() {
        assert_eq!(update(250, Some(1000)).fraction(), Some(0.25));
        assert_eq!(update(1000, Some(1000)).fraction(), Some(1.0));
        assert_eq!(update(0, Some(0)).fraction(), Some(1.0));
    }

    #[test]
    fn test_indeterminate() {
        let u = update(4096, None);
        assert!(u.is_indeterminate());
        assert_eq!(u.fraction(), None);
        assert!(!u.is_terminal());
    }
}
