//! Error types for star generation.

use thiserror::Error;

/// Errors raised while generating star batches.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StarError {
    /// A caller-supplied argument was out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
