//! Per-file conversion errors.

use snp_ingest::IngestError;
use snp_transform::TransformError;
use thiserror::Error;

/// Why a single file could not be converted.
///
/// These never abort a batch; the orchestrator records them against the file.
#[derive(Debug, Error)]
pub enum FileConversionError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Result type for single-file conversion.
pub type Result<T> = std::result::Result<T, FileConversionError>;
