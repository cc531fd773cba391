//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `FlockError` as one
//! variant via `#[from]`, so a configuration failure raised here reaches the
//! caller unchanged.

use thiserror::Error;

/// The top-level error type for `flock-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FlockError {
    /// A simulation parameter is missing or out of range.  Always fatal to
    /// the construction attempt that raised it.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `flock-core`.
pub type FlockResult<T> = Result<T, FlockError>;
