//! Drives one transfer from request to terminal signal.

use super::status::Status;
use super::stream::InstrumentedStream;
use super::transfer::Transfer;
use crate::error::{Error, Result};
use crate::http::Source;

use std::path::Path;
use std::sync::Arc;
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::oneshot;
use tracing::{debug, warn};

const BUFFER_SIZE: usize = 8 * 1024;

/// How a transfer ended. Sent exactly once per transfer.
#[derive(Debug, Clone)]
pub enum Outcome {
    Done,
    Failed(Arc<Error>),
}

/// Runs a single transfer: fetch, count, copy to disk, signal.
pub struct TransferTask {
    transfer: Arc<Transfer>,
    source: Arc<dyn Source>,
}

impl TransferTask {
    pub fn new(transfer: Arc<Transfer>, source: Arc<dyn Source>) -> Self {
        Self { transfer, source }
    }

    /// Run the transfer to completion and report the outcome on `done`.
    ///
    /// The sender is consumed, so the terminal signal goes out exactly once
    /// and reaches exactly one listener.
    pub async fn run(self, done: oneshot::Sender<Outcome>) {
        let outcome = match self.execute().await {
            Ok(()) => {
                self.transfer.advance(Status::Done);
                debug!(
                    "{} done: {} bytes in {:?}",
                    self.transfer.label(),
                    self.transfer.bytes_transferred(),
                    self.transfer.elapsed()
                );
                Outcome::Done
            }
            Err(e) => {
                warn!("{} failed: {}", self.transfer.label(), e);
                let error = Arc::new(e);
                self.transfer.fail(error.clone());
                Outcome::Failed(error)
            }
        };

        if done.send(outcome).is_err() {
            debug!("Nobody is listening for {}", self.transfer.label());
        }
    }

    async fn execute(&self) -> Result<()> {
        let transfer = &self.transfer;

        if let Some(delay) = transfer.start_delay() {
            debug!("Delaying {} by {:?}", transfer.label(), delay);
            tokio::time::sleep(delay).await;
        }

        let fetched = self.source.fetch(transfer.url()).await?;
        if let Some(length) = fetched.declared_length {
            transfer.set_declared_length(length);
        }

        let path = transfer.destination();
        let mut sink = create_sink(path).await?;
        let mut stream = InstrumentedStream::new(fetched.stream, transfer.counter().clone());

        transfer.advance(Status::Downloading);

        let mut buf = vec![0u8; BUFFER_SIZE];
        loop {
            let n = stream
                .read(&mut buf)
                .await
                .map_err(|source| Error::StreamRead { source })?;
            if n == 0 {
                break;
            }
            sink.write_all(&buf[..n])
                .await
                .map_err(|source| sink_write_error(path, source))?;
        }
        sink.flush()
            .await
            .map_err(|source| sink_write_error(path, source))?;

        reconcile(transfer);
        Ok(())
    }
}

async fn create_sink(path: &Path) -> Result<File> {
    let sink_create_error = |source| Error::SinkCreate {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        debug!("Creating destination directory {:?}", dir);
        fs::create_dir_all(dir).await.map_err(sink_create_error)?;
    }

    debug!("Creating destination file {:?}", path);
    File::create(path).await.map_err(sink_create_error)
}

/// Bring the byte count up to the declared length after a clean end of body.
fn reconcile(transfer: &Transfer) {
    let received = transfer.bytes_transferred();
    match transfer.declared_length() {
        Some(expected) if received < expected => {
            warn!(
                "{} ended after {} of {} declared bytes",
                transfer.label(),
                received,
                expected
            );
            transfer.counter().add(expected - received);
        }
        Some(expected) if received > expected => {
            warn!(
                "{} sent {} bytes, {} were declared",
                transfer.label(),
                received,
                expected
            );
        }
        _ => {}
    }
}

fn sink_write_error(path: &Path, source: std::io::Error) -> Error {
    Error::SinkWrite {
        path: path.to_path_buf(),
        source,
    }
}
