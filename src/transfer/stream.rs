//! Byte stream wrapper that counts what flows through it.

use super::counter::ByteCounter;

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};

/// Wraps a readable stream and adds every successfully read byte to a
/// [`ByteCounter`].
///
/// Errors and end-of-stream are passed through untouched, and a failed read
/// never moves the counter.
#[derive(Debug)]
pub struct InstrumentedStream<R> {
    inner: R,
    counter: ByteCounter,
}

impl<R> InstrumentedStream<R> {
    /// Wraps `inner`, reporting into `counter`.
    pub fn new(inner: R, counter: ByteCounter) -> Self {
        Self { inner, counter }
    }

    /// Get a reference to the counter this stream reports into.
    pub fn counter(&self) -> &ByteCounter {
        &self.counter
    }

    /// Unwraps the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for InstrumentedStream<R> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let before = buf.filled().len();
        let poll = Pin::new(&mut self.inner).poll_read(cx, buf);
        if let Poll::Ready(Ok(())) = poll {
            let read = buf.filled().len() - before;
            self.counter.add(read as u64);
        }
        poll
    }
}
