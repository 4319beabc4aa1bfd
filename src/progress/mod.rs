//! Progress module: observing transfers and showing what they do.
//!
//! # Overview
//!
//! - `update` - The [`ProgressUpdate`] record and the [`ProgressSink`] trait
//! - `reporter` - The per-transfer [`ProgressReporter`]
//! - `style` - Progress bar styling options and templates
//! - `display` - [`ProgressDisplay`], the terminal sink
//!
//! # Examples
//!
//! ## Custom Progress Bar Styling
//!
//! ```rust
//! use fetchbar::progress::{StyleOptions, ProgressBarOpts};
//!
//! let style_options = StyleOptions::new(
//!     ProgressBarOpts::new(
//!         Some("[{bar:40.cyan/blue}] {pos}/{len} {msg}".to_string()),
//!         Some("█▉▊▋▌▍▎▏  ".to_string()),
//!         true,
//!         false
//!     ),
//!     ProgressBarOpts::with_transfer_style(),
//!     ProgressBarOpts::with_indeterminate_style(),
//! );
//! ```
//!
//! ## Publishing Somewhere Else
//!
//! ```rust
//! use fetchbar::progress::{ProgressSink, ProgressUpdate};
//!
//! struct LogSink;
//!
//! impl ProgressSink for LogSink {
//!     fn publish(&self, update: &ProgressUpdate) {
//!         match update.fraction() {
//!             Some(f) => println!("{} {:.0}%", update.label, f * 100.0),
//!             None => println!("{} {} bytes", update.label, update.bytes),
//!         }
//!     }
//! }
//! ```

pub(crate) mod display;
pub(crate) mod reporter;
pub(crate) mod style;
pub(crate) mod update;

pub use display::ProgressDisplay;
pub use reporter::{ProgressReporter, DEFAULT_REFRESH_RATE};
pub use style::{ProgressBarOpts, StyleOptions};
pub use update::{ProgressSink, ProgressUpdate};
