//! Centralized error handling for swiftstatus

use std::io;
use thiserror::Error;

/// Error type for field queries and rendering
#[derive(Debug, Error)]
pub enum StatusError {
    /// I/O errors (spawning a tool, writing to stdout)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The tool ran but exited unsuccessfully
    #[error("command '{program}' failed with exit code: {code:?}")]
    CommandFailed { program: String, code: Option<i32> },
    /// The tool printed nothing
    #[error("command '{program}' produced no output")]
    EmptyOutput { program: String },
    /// The value was never looked for because its query failed
    #[error("query failed: {0}")]
    QueryFailed(String),
    /// Output did not contain the expected pattern
    #[error("parse error: {0}")]
    Parse(String),
}

/// Type alias for Results in swiftstatus
pub type Result<T> = std::result::Result<T, StatusError>;
