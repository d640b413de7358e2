//! interdict core: event vocabulary, action tokens, verdicts, and errors.
//!
//! This crate defines the contracts shared by the enforcement engine and
//! host integrations. It intentionally carries no runtime dependencies so it
//! can be embedded anywhere the host processes interaction events.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `InterdictError`/`Result` so host
//! processes do not crash on malformed rule files.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod action;
pub mod error;
pub mod event;

/// Shared result type.
pub use error::{InterdictError, Result};
