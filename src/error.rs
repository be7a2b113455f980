//! Error types for the toolkit

use thiserror::Error;

/// Failures surfaced by the fallible parts of the crate.
///
/// Searches never produce an error; an exhausted scan is a normal `None`.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// A precondition on an argument was violated. Raised before any work
    /// begins, never retried.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
