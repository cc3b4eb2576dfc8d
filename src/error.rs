use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the counting entry points.
#[derive(Debug, Error)]
pub enum CountError {
    /// No input path was supplied. Caught before any I/O happens.
    #[error("invalid argument: no input path was provided")]
    InvalidArgument,

    /// The path does not name an existing regular file.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other read failure, including non-UTF-8 content, passes through
    /// untranslated.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
