//! Error types for notation mapping.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, replacing or saving a mapping table.
///
/// A failed load always leaves the mapper unloaded.
#[derive(Debug, Error)]
pub enum MapperError {
    #[error("mapping file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("invalid mapping file type '{extension}' (expected .json): {path}")]
    InvalidExtension { path: PathBuf, extension: String },

    #[error("failed to read mapping file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON format in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing 'mappings' key in JSON")]
    MissingMappings,

    #[error("'mappings' must be a JSON object")]
    MappingsNotObject,

    /// Lists up to three offending entries.
    #[error("invalid mapping entries (non-string): {}", .entries.join(", "))]
    NonStringEntries { entries: Vec<String>, count: usize },

    #[error("failed to write mapping file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize mappings: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MapperError>;
