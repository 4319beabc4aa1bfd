//! Downloader module: the manager that runs a batch of jobs.
//!
//! # Overview
//!
//! - `downloader` - Core Downloader struct with the batch orchestration logic
//! - `builder` - DownloaderBuilder for flexible configuration
//! - `config` - Configuration structures and callback types
//! - `report` - The aggregated [`Report`] of a batch
//!
//! # Examples
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use fetchbar::downloader::DownloaderBuilder;
//!
//! let downloader = DownloaderBuilder::hidden().build();
//! ```

pub mod builder;
pub mod config;
pub mod downloader;
pub mod report;

pub use builder::DownloaderBuilder;
pub use config::{DownloadCallback, DownloaderConfig};
pub use downloader::Downloader;
pub use report::Report;
