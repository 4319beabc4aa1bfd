//! State shared by a transfer task and its progress reporter.

use super::counter::ByteCounter;
use super::status::Status;
use super::Job;
use crate::error::Error;

use reqwest::Url;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug)]
struct Phase {
    status: Status,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
    error: Option<Arc<Error>>,
}

impl Phase {
    fn advance(&mut self, label: &str, next: Status) -> bool {
        if !self.status.can_advance_to(next) {
            return false;
        }
        let now = Instant::now();
        match next {
            Status::Downloading => self.started_at = Some(now),
            Status::Done | Status::Failed => self.ended_at = Some(now),
            Status::Preparing => {}
        }
        debug!("{}: {} -> {}", label, self.status, next);
        self.status = next;
        true
    }
}

/// One download job and its live state.
///
/// The transfer task drives the state forward. The reporter reads it, and
/// only fails it when the task stopped without saying how it ended.
#[derive(Debug)]
pub struct Transfer {
    id: usize,
    label: String,
    url: Url,
    destination: PathBuf,
    start_delay: Option<Duration>,
    counter: ByteCounter,
    declared_length: OnceLock<u64>,
    phase: Mutex<Phase>,
}

impl Transfer {
    /// Creates a transfer in the `Preparing` state, writing to `destination`.
    pub fn new(id: usize, job: &Job, destination: PathBuf) -> Self {
        Self {
            id,
            label: job.display_label(),
            url: job.url.clone(),
            destination,
            start_delay: job.start_delay,
            counter: ByteCounter::new(),
            declared_length: OnceLock::new(),
            phase: Mutex::new(Phase {
                status: Status::Preparing,
                started_at: None,
                ended_at: None,
                error: None,
            }),
        }
    }

    /// Get the transfer's position in its batch.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the transfer's display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the transfer's url.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the file the transfer writes to.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Get the delay served before the request is issued.
    pub fn start_delay(&self) -> Option<Duration> {
        self.start_delay
    }

    /// Get a reference to the byte counter of this transfer.
    pub fn counter(&self) -> &ByteCounter {
        &self.counter
    }

    /// Bytes observed so far.
    pub fn bytes_transferred(&self) -> u64 {
        self.counter.snapshot()
    }

    /// The transport-reported size, if any.
    pub fn declared_length(&self) -> Option<u64> {
        self.declared_length.get().copied()
    }

    /// Record the transport-reported size. Only the first call has an effect.
    pub fn set_declared_length(&self, length: u64) {
        if self.declared_length.set(length).is_err() {
            debug!("Declared length of {} was already set", self.label);
        }
    }

    /// Get the transfer's status.
    pub fn status(&self) -> Status {
        self.phase().status
    }

    /// When the transfer entered `Downloading`.
    pub fn started_at(&self) -> Option<Instant> {
        self.phase().started_at
    }

    /// When the transfer reached a terminal state.
    pub fn ended_at(&self) -> Option<Instant> {
        self.phase().ended_at
    }

    /// Why the transfer failed, once it has.
    pub fn error(&self) -> Option<Arc<Error>> {
        self.phase().error.clone()
    }

    /// Time spent downloading, up to now or to the end of the transfer.
    pub fn elapsed(&self) -> Duration {
        let phase = self.phase();
        match (phase.started_at, phase.ended_at) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    /// Move the transfer to `next`.
    ///
    /// Returns `false`, leaving the state untouched, if the move would go
    /// backwards or leave a terminal state. Entering `Downloading` stamps
    /// `started_at`; entering a terminal state stamps `ended_at`.
    pub fn advance(&self, next: Status) -> bool {
        self.phase().advance(&self.label, next)
    }

    /// Move the transfer to `Failed` because of `error`.
    ///
    /// A transfer that already failed without a recorded cause takes
    /// `error` as its cause. A `Done` transfer is left untouched. Returns
    /// whether the status changed.
    pub fn fail(&self, error: Arc<Error>) -> bool {
        let mut phase = self.phase();
        let moved = phase.advance(&self.label, Status::Failed);
        if phase.status == Status::Failed && phase.error.is_none() {
            phase.error = Some(error);
        }
        moved
    }

    fn phase(&self) -> MutexGuard<'_, Phase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
