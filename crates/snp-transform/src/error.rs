//! Error types for the metric stage.

use thiserror::Error;

/// Errors raised while preparing rows for metric calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Gain and return-loss metrics are defined for 2-port networks only.
    #[error("unsupported port count {ports}: metrics require a 2-port network")]
    UnsupportedPortCount { ports: usize },
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
