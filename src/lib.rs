//! fetchbar downloads files concurrently over HTTP(S) and reports live
//! progress for each of them without slowing the transfers down.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use fetchbar::{DownloaderBuilder, Error, Job};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let reqwest_rs = "https://github.com/seanmonstar/reqwest/archive/refs/tags/v0.11.9.zip";
//! let jobs = vec![Job::try_from(reqwest_rs)?];
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("output"))
//!     .build();
//! let report = downloader.download(&jobs).await?;
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! # How it works
//!
//! Each job becomes a [`Transfer`]. Its [`TransferTask`] reads the response
//! through an [`InstrumentedStream`] that adds every byte to a shared
//! [`ByteCounter`], and writes them to the destination file. A
//! [`ProgressReporter`] samples the counter on a fixed interval and
//! publishes [`ProgressUpdate`]s to a [`ProgressSink`] until the task's
//! one-shot terminal signal arrives; it then publishes exactly one final
//! update. The [`Downloader`] runs all jobs side by side and returns a
//! [`Report`] once every one of them has ended.
//!
//! # Module Organization
//!
//! - [`transfer`] - Jobs, the byte counter, the instrumented stream and the transfer task
//! - [`progress`] - Progress updates, the reporter and the terminal display
//! - [`downloader`] - The `Downloader`, its builder and the batch `Report`
//! - [`http`] - The byte source abstraction and its HTTP implementation
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Shared utility functions

pub mod downloader;
pub mod error;
pub mod http;
pub mod progress;
pub mod transfer;
pub mod utils;

pub use downloader::{Downloader, DownloaderBuilder, Report};
pub use error::{Error, Result};
pub use http::{create_http_client, Fetched, HttpClientConfig, HttpSource, Source};
pub use progress::{
    ProgressBarOpts, ProgressDisplay, ProgressReporter, ProgressSink, ProgressUpdate,
    StyleOptions,
};
pub use transfer::{
    ByteCounter, InstrumentedStream, Job, Outcome, Status, Summary, Transfer, TransferTask,
};
pub use utils::declared_length;
