//! Final record of a finished transfer.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fetchbar::transfer::Status;
//! # fn example(summary: &fetchbar::Summary) {
//! match summary.status() {
//!     Status::Done => println!("{}: {} bytes", summary.label(), summary.size()),
//!     Status::Failed => println!("{}: {:?}", summary.label(), summary.error()),
//!     _ => unreachable!("summaries are only built for finished transfers"),
//! }
//! # }
//! ```

use super::status::Status;
use super::transfer::Transfer;
use crate::error::Error;

use reqwest::Url;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Represents a finished [`Transfer`].
#[derive(Debug, Clone)]
pub struct Summary {
    id: usize,
    label: String,
    url: Url,
    destination: PathBuf,
    declared_length: Option<u64>,
    /// Bytes transferred when the transfer ended.
    size: u64,
    status: Status,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
    elapsed: Duration,
    error: Option<Arc<Error>>,
}

impl Summary {
    /// Capture the state of `transfer`, including why it failed.
    pub fn new(transfer: &Transfer) -> Self {
        Self {
            id: transfer.id(),
            label: transfer.label().to_string(),
            url: transfer.url().clone(),
            destination: transfer.destination().to_path_buf(),
            declared_length: transfer.declared_length(),
            size: transfer.bytes_transferred(),
            status: transfer.status(),
            started_at: transfer.started_at(),
            ended_at: transfer.ended_at(),
            elapsed: transfer.elapsed(),
            error: transfer.error(),
        }
    }

    /// Position of the job in the submitted batch.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the summary's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the summary's url.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the file the transfer wrote to.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Get the length the server declared, if any.
    pub fn declared_length(&self) -> Option<u64> {
        self.declared_length
    }

    /// Get the summary's size.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the summary's status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// When the download phase started. `None` if it never did.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// When the transfer ended.
    pub fn ended_at(&self) -> Option<Instant> {
        self.ended_at
    }

    /// Get the time spent downloading.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The error that failed the transfer.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_deref()
    }

    /// Return `true` if the transfer is `Done`.
    pub fn is_success(&self) -> bool {
        self.status == Status::Done
    }
}
