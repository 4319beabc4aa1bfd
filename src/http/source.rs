//! Where transfer bytes come from.
//!
//! A [`Source`] turns a URL into a readable byte stream plus the declared
//! length, if the transport reports one. [`HttpSource`] is the real
//! implementation; tests and embedders can plug in their own.

use super::client::{create_http_client, HttpClientConfig};
use crate::error::{Error, Result};
use crate::utils::declared_length;

use futures::future::BoxFuture;
use futures::TryStreamExt;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::io;
use std::pin::Pin;
use tokio::io::AsyncRead;
use tokio_util::io::StreamReader;
use tracing::debug;

/// A readable stream of response bytes.
pub type ByteStream = Pin<Box<dyn AsyncRead + Send>>;

/// A successfully opened remote stream.
pub struct Fetched {
    pub stream: ByteStream,
    /// Total size reported by the transport, `None` when unknown.
    pub declared_length: Option<u64>,
}

impl Fetched {
    pub fn new(stream: ByteStream, declared_length: Option<u64>) -> Self {
        Self {
            stream,
            declared_length,
        }
    }
}

impl fmt::Debug for Fetched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetched")
            .field("declared_length", &self.declared_length)
            .finish_non_exhaustive()
    }
}

/// Opens remote byte streams.
///
/// A non-success answer must come back as an error, never as a stream.
pub trait Source: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<Fetched>>;
}

/// [`Source`] backed by an HTTP client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: ClientWithMiddleware,
}

impl HttpSource {
    pub fn new(client: ClientWithMiddleware) -> Self {
        Self { client }
    }

    /// Build the underlying client from `config`.
    pub fn from_config(config: HttpClientConfig) -> Result<Self> {
        Ok(Self::new(create_http_client(config)?))
    }
}

impl Source for HttpSource {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<Fetched>> {
        Box::pin(async move {
            debug!("Fetching {}", url);
            let res = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| Error::Transport {
                    url: url.clone(),
                    source,
                })?;

            let status = res.status();
            if !status.is_success() {
                return Err(Error::BadStatus {
                    url: url.clone(),
                    status,
                });
            }

            let length = declared_length(res.headers());
            if length.is_none() {
                debug!("{} did not declare a length", url);
            }

            let body = res.bytes_stream().map_err(io::Error::other);
            Ok(Fetched::new(Box::pin(StreamReader::new(body)), length))
        })
    }
}
