//! Configuration structures and defaults for the downloader.
//!
//! # Examples
//!
//! ```rust
//! use fetchbar::downloader::DownloadCallback;
//! use fetchbar::transfer::{Status, Summary};
//!
//! let callback: DownloadCallback = Box::new(|summary: &Summary| {
//!     match summary.status() {
//!         Status::Done => println!("✓ Downloaded: {}", summary.label()),
//!         _ => println!("✗ Failed: {} - {:?}", summary.label(), summary.error()),
//!     }
//! });
//! ```

use crate::http::Source;
use crate::progress::{ProgressSink, StyleOptions, DEFAULT_REFRESH_RATE};
use crate::transfer::Summary;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::sync::Arc;
use std::time::Duration;

/// Callback type for download completion events
pub type DownloadCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory that relative destinations are resolved against.
    pub directory: std::path::PathBuf,
    /// Number of maximum concurrent downloads.
    pub concurrent_downloads: usize,
    /// Interval between two progress updates of a transfer.
    pub refresh_rate: Duration,
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// Hide main progress bar for single file downloads.
    pub single_file_progress: bool,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy configuration.
    pub proxy: Option<reqwest::Proxy>,
    /// Callback for when each download completes.
    pub on_complete: Option<Arc<DownloadCallback>>,
    /// Replacement for the HTTP source.
    pub source: Option<Arc<dyn Source>>,
    /// Replacement for the terminal display.
    pub sink: Option<Arc<dyn ProgressSink>>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("concurrent_downloads", &self.concurrent_downloads)
            .field("refresh_rate", &self.refresh_rate)
            .field("style_options", &self.style_options)
            .field("single_file_progress", &self.single_file_progress)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy)
            .field("on_complete", &self.on_complete.is_some())
            .field("source", &self.source.is_some())
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            concurrent_downloads: 32,
            refresh_rate: DEFAULT_REFRESH_RATE,
            style_options: StyleOptions::default(),
            single_file_progress: false,
            headers: None,
            proxy: None,
            on_complete: None,
            source: None,
            sink: None,
        }
    }
}
