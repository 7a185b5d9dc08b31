//! Data model shared by the SnP conversion crates.
//!
//! - **rows**: unit-normalized S-parameter rows read from Touchstone files
//! - **metadata**: fields derived from the measurement filename
//! - **output**: the fixed-shape output record and its column order
//! - **options**: conversion options and link direction
//! - **result**: batch conversion and validation results

pub mod metadata;
pub mod options;
pub mod output;
pub mod result;
pub mod rows;

pub use metadata::FileMetadata;
pub use options::{ConversionOptions, LinkDirection};
pub use output::{OUTPUT_COLUMNS, OutputRow};
pub use result::{ConversionRecord, ConversionResult, FileIssue, InvalidFile, ValidationReport};
pub use rows::{FrequencyRow, NetworkPoint};

/// Placeholder used for metadata that could not be derived from a filename.
pub const UNKNOWN: &str = "Unknown";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes() {
        let result = ConversionResult {
            success: true,
            files_processed: 2,
            total_files: 3,
            rows_generated: 10,
            output_path: Some("out.csv".into()),
            output_size: 2048,
            errors: vec![FileIssue::new("b.s2p", "no data rows")],
            records: vec![],
            cancelled: false,
        };
        let json = serde_json::to_string(&result).expect("serialize result");
        let round: ConversionResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(round.files_processed, 2);
        assert_eq!(round.errors[0].file, "b.s2p");
    }
}
