//! Error types for output writing.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while flushing buffered rows to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Nothing was buffered, so no table is written.
    #[error("no data rows to write to {path}")]
    NoRows { path: PathBuf },

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create temporary output file in {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build output table: {0}")]
    DataFrame(#[source] PolarsError),

    #[error("failed to write CSV to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    /// The finished table could not be moved into place.
    #[error("failed to replace output file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read output file metadata {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
