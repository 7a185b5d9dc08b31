//! Batch conversion of SnP measurements to a CSV table.
//!
//! [`ConversionService`] runs each file through filename metadata
//! extraction, Touchstone reading, band filtering and metric calculation,
//! isolating per-file failures, then writes all rows in one flush.

pub mod error;
pub mod observer;
pub mod service;

pub use error::{FileConversionError, Result};
pub use observer::{CancelFlag, Cancellable, ConversionObserver, NoProgress};
pub use service::{ConversionService, OUTPUT_ERROR_LABEL};
