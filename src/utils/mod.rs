//! Shared utility functions.
//!
//! # Overview
//!
//! The utils module currently contains:
//!
//! - [`content_length`] - Declared length extraction from HTTP responses

pub mod content_length;

pub use content_length::{declared_length, parse_content_length};
