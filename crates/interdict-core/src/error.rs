//! Shared error type across interdict crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, InterdictError>;

/// Unified error type used by core and engine.
///
/// The engine itself has no recoverable error states (absent chains degrade
/// to always-allow, absent exempt lists to never-exempt); only configuration
/// loading is fallible.
#[derive(Debug, Error)]
pub enum InterdictError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
