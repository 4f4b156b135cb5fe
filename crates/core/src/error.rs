//! Error types for sift
//!
//! The engine itself has almost no failure modes: unknown terms, empty
//! queries and empty corpora all produce well-defined results. The errors
//! below cover caller contract violations and the I/O performed when a
//! corpus is loaded from disk.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for sift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sift
#[derive(Debug, Error)]
pub enum Error {
    /// A caller passed an argument inconsistent with the index
    /// (for example a universe size that does not match the record count)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Strategy name outside the fixed enumeration
    #[error("Unknown strategy: {0:?} (expected one of ALL, ANY, NONE)")]
    UnknownStrategy(String),

    /// I/O error while reading a corpus
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build an `InvalidArgument` error for a universe size that disagrees
    /// with the number of indexed records
    pub fn universe_mismatch(expected: usize, actual: usize) -> Self {
        Error::InvalidArgument(format!(
            "universe size {} does not match {} indexed records",
            actual, expected
        ))
    }
}
