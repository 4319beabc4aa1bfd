//! Lifecycle states of a transfer.

use std::fmt;

/// Where a transfer is in its lifecycle.
///
/// States only move forward: `Preparing → Downloading → {Done | Failed}`.
/// A transfer may also fail straight from `Preparing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Preparing,
    Downloading,
    Done,
    Failed,
}

impl Status {
    /// Return `true` for `Done` and `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Done | Status::Failed)
    }

    /// Whether moving from `self` to `next` is allowed.
    pub fn can_advance_to(self, next: Status) -> bool {
        match (self, next) {
            (Status::Preparing, Status::Downloading) => true,
            (Status::Preparing, Status::Failed) => true,
            (Status::Downloading, Status::Done | Status::Failed) => true,
            _ => false,
        }
    }

    /// Get the lowercase name shown by the progress display.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Preparing => "preparing",
            Status::Downloading => "downloading",
            Status::Done => "done",
            Status::Failed => "failed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
