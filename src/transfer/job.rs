//! Represents a file to be downloaded.
//!
//! # Examples
//!
//! ```rust
//! use fetchbar::transfer::Job;
//! use std::convert::TryFrom;
//! use std::time::Duration;
//!
//! // File name extracted from the URL.
//! let job = Job::try_from("https://example.com/file.zip")?;
//! assert_eq!(job.destination.to_str(), Some("file.zip"));
//!
//! // Explicit destination, started five seconds after the batch.
//! let url = reqwest::Url::parse("https://example.com/download")?;
//! let job = Job::new(&url, "custom-name.zip").with_delay(Duration::from_secs(5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::Error;

use reqwest::Url;
use std::convert::TryFrom;
use std::path::PathBuf;
use std::time::Duration;

/// One source-to-destination download request.
#[derive(Debug, Clone)]
pub struct Job {
    /// URL of the file to download.
    pub url: Url,
    /// Where to save the file. Relative paths are resolved against the
    /// downloader's directory.
    pub destination: PathBuf,
    /// How long to wait before issuing the request.
    pub start_delay: Option<Duration>,
    /// Display label. Defaults to the destination's file name.
    pub label: Option<String>,
}

impl Job {
    /// Creates a new [`Job`].
    ///
    /// When using the [`Job::try_from`] method, the destination is
    /// automatically extracted from the URL.
    pub fn new(url: &Url, destination: impl Into<PathBuf>) -> Self {
        Self {
            url: url.clone(),
            destination: destination.into(),
            start_delay: None,
            label: None,
        }
    }

    /// Delay the start of this job.
    pub fn with_delay(self, delay: Duration) -> Self {
        Self {
            start_delay: Some(delay),
            ..self
        }
    }

    /// Override the label shown by the progress display.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    /// The label to display for this job.
    pub fn display_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        self.destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.url.to_string())
    }
}

impl TryFrom<&Url> for Job {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        value
            .path_segments()
            .ok_or_else(|| {
                Error::InvalidUrl(format!(
                    "The url \"{}\" does not contain a valid path",
                    value
                ))
            })?
            .next_back()
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                form_urlencoded::parse(segment.as_bytes())
                    .map(|(key, val)| [key, val].concat())
                    .collect::<String>()
            })
            .map(|filename| Job::new(value, filename))
            .ok_or_else(|| {
                Error::InvalidUrl(format!("The url \"{}\" does not contain a filename", value))
            })
    }
}

impl TryFrom<&str> for Job {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| Job::try_from(&u))
    }
}
