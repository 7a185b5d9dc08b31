//! Error types for SnP ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading measurement files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Measurement file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Touchstone Errors ===
    /// Extension is not `.s1p` through `.s12p`.
    #[error("unsupported SnP file extension '{extension}' in {path} (s1p~s12p supported)")]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// No line in the file held a complete data point.
    #[error("no valid data rows in {path} ({skipped} malformed lines skipped)")]
    NoDataRows { path: PathBuf, skipped: usize },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::UnsupportedExtension {
            path: PathBuf::from("/data/a.s13p"),
            extension: ".s13p".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported SnP file extension '.s13p' in /data/a.s13p (s1p~s12p supported)"
        );
    }

    #[test]
    fn test_no_data_rows_display() {
        let err = IngestError::NoDataRows {
            path: PathBuf::from("x.s2p"),
            skipped: 3,
        };
        assert_eq!(
            err.to_string(),
            "no valid data rows in x.s2p (3 malformed lines skipped)"
        );
    }
}
