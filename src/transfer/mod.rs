//! Transfer module: everything that happens to one download job.
//!
//! # Overview
//!
//! - [`counter`] - The [`ByteCounter`] shared by a transfer and its reporter
//! - [`stream`] - [`InstrumentedStream`], which feeds the counter as bytes are read
//! - [`status`] - Lifecycle [`Status`] and its allowed transitions
//! - [`job`] - The [`Job`] input type
//! - [`transfer`] - The shared [`Transfer`] record
//! - [`task`] - The [`TransferTask`] state machine and its terminal [`Outcome`]
//! - [`summary`] - The [`Summary`] of a finished transfer
//!
//! # Examples
//!
//! ```rust
//! use fetchbar::transfer::ByteCounter;
//!
//! let counter = ByteCounter::new();
//! let reader = counter.clone();
//! counter.add(512);
//! assert_eq!(reader.snapshot(), 512);
//! ```

pub mod counter;
pub mod job;
pub mod status;
pub mod stream;
pub mod summary;
pub mod task;
pub mod transfer;

pub use counter::ByteCounter;
pub use job::Job;
pub use status::Status;
pub use stream::InstrumentedStream;
pub use summary::Summary;
pub use task::{Outcome, TransferTask};
pub use transfer::Transfer;
