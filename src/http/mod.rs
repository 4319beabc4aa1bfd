//! HTTP module: the network side of a transfer.
//!
//! # Overview
//!
//! - [`client`] - HTTP client creation and middleware configuration
//! - [`source`] - The [`Source`] abstraction and its HTTP implementation
//!
//! # Examples
//!
//! ```rust
//! use fetchbar::http::{HttpClientConfig, HttpSource};
//!
//! # fn example() -> Result<(), fetchbar::Error> {
//! let source = HttpSource::from_config(HttpClientConfig::default())?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod source;

pub use client::{create_http_client, HttpClientConfig, DEFAULT_USER_AGENT};
pub use source::{ByteStream, Fetched, HttpSource, Source};
