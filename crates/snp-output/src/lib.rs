//! Output writing for converted SnP data.
//!
//! Rows are buffered for a whole batch and flushed once as a CSV table with
//! the fixed column order in [`snp_model::OUTPUT_COLUMNS`].

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::{CsvOutputWriter, WriteSummary, rows_to_dataframe};
