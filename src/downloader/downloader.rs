//! The download manager.
//!
//! [`Downloader`] runs a batch of [`Job`]s. Every job gets its own
//! [`TransferTask`] and [`ProgressReporter`], each spawned as a separate
//! task. A failed job never stops or affects the others; failures are
//! collected in the returned [`Report`] once the whole batch is finished.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fetchbar::downloader::DownloaderBuilder;
//! use fetchbar::transfer::Job;
//! use std::convert::TryFrom;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().build();
//! let jobs = vec![
//!     Job::try_from("https://example.com/file1.zip")?,
//!     Job::try_from("https://example.com/file2.pdf")?.with_delay(Duration::from_secs(5)),
//! ];
//!
//! let report = downloader.download(&jobs).await?;
//! for failure in report.failures() {
//!     println!("{} failed: {:?}", failure.label(), failure.error());
//! }
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use super::report::Report;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, HttpSource, Source};
use crate::progress::{ProgressDisplay, ProgressReporter, ProgressSink};
use crate::transfer::{Job, Summary, Transfer, TransferTask};

use futures::stream::{self, StreamExt};
use reqwest::header::HeaderMap;
use std::fmt;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use fetchbar::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    pub fn concurrent_downloads(&self) -> usize {
        self.config.concurrent_downloads
    }

    pub fn refresh_rate(&self) -> Duration {
        self.config.refresh_rate
    }

    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    pub fn single_file_progress(&self) -> bool {
        self.config.single_file_progress
    }

    /// Run every job and wait for all of them to finish.
    ///
    /// The only error returned here is failing to build the HTTP client;
    /// individual transfer failures are reported in the [`Report`].
    pub async fn download(&self, jobs: &[Job]) -> Result<Report> {
        let source = self.source()?;
        let sink: Arc<dyn ProgressSink> = match &self.config.sink {
            Some(sink) => sink.clone(),
            None => Arc::new(ProgressDisplay::new(
                self.config.style_options.clone(),
                jobs.len(),
                self.config.single_file_progress,
            )),
        };

        debug!("Starting {} downloads", jobs.len());
        let summaries = stream::iter(jobs.iter().enumerate())
            .map(|(id, job)| self.run(id, job, source.clone(), sink.clone()))
            .buffer_unordered(self.config.concurrent_downloads.max(1))
            .collect::<Vec<_>>()
            .await;

        sink.finish();

        let report = Report::new(summaries);
        debug!(
            "Finished {} downloads, {} failed",
            report.len(),
            report.failures().count()
        );
        Ok(report)
    }

    fn source(&self) -> Result<Arc<dyn Source>> {
        if let Some(source) = &self.config.source {
            return Ok(source.clone());
        }
        let source = HttpSource::from_config(HttpClientConfig {
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        })?;
        Ok(Arc::new(source))
    }

    /// Run one job: a transfer task and its reporter, joined by a one-shot
    /// terminal signal that only the reporter listens to.
    async fn run(
        &self,
        id: usize,
        job: &Job,
        source: Arc<dyn Source>,
        sink: Arc<dyn ProgressSink>,
    ) -> Summary {
        let destination = self.config.directory.join(&job.destination);
        let transfer = Arc::new(Transfer::new(id, job, destination));
        let (done_tx, done_rx) = oneshot::channel();

        let task = tokio::spawn(TransferTask::new(transfer.clone(), source).run(done_tx));
        let reporter = tokio::spawn(
            ProgressReporter::new(transfer.clone(), sink, self.config.refresh_rate).run(done_rx),
        );

        // A task that dies drops its sender; the reporter then fails the
        // transfer itself.
        if let Err(e) = task.await {
            warn!("Transfer task of {} died: {}", transfer.label(), e);
        }

        // The task has ended by now, so a dead reporter does not decide
        // the outcome unless the task never got to.
        let summary = match reporter.await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Progress reporter of {} died: {}", transfer.label(), e);
                transfer.fail(Arc::new(Error::Internal(format!(
                    "progress reporter stopped: {}",
                    e
                ))));
                Summary::new(&transfer)
            }
        };

        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }

        summary
    }
}
