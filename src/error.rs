//! Error handling for fetchbar.
//!
//! Every failure a transfer can hit is one variant of [`Error`]. Failures
//! are recorded on the transfer they belong to and never cross over to
//! sibling transfers; the [`Downloader`](crate::Downloader) collects them
//! once all jobs are finished.

use reqwest::{StatusCode, Url};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using fetchbar.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Raised when a transfer stops without reporting how it ended.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response (connection, DNS, timeout).
    #[error("Transport error while requesting {url}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest_middleware::Error,
    },

    /// The server answered, but not with a success status.
    #[error("{url} answered with {status}")]
    BadStatus { url: Url, status: StatusCode },

    /// Reading the response body failed midway.
    #[error("Failed to read the response body")]
    StreamRead {
        #[source]
        source: io::Error,
    },

    /// The destination file (or its directory) could not be created.
    #[error("Failed to create {path:?}")]
    SinkCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the destination file failed.
    #[error("Failed to write {path:?}")]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error from the Reqwest library, raised while building the HTTP client.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
}

/// Result type alias for operations that can fail with a fetchbar error.
pub type Result<T> = std::result::Result<T, Error>;
