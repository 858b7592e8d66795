//! Error type for scan formatting runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that terminate a formatting run.
///
/// Every variant is fatal. Records already written before a `Read` or
/// `Write` failure stay written.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The input path could not be opened for reading.
    #[error("cannot open '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already-open input failed.
    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output stream rejected a record.
    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
}

/// Result alias for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;
