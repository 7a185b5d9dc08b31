//! Batch conversion service.

use std::path::{Path, PathBuf};

use snp_ingest::{extract_metadata, read_touchstone, snp_port_count};
use snp_map::NotationMapper;
use snp_model::{
    ConversionOptions, ConversionRecord, ConversionResult, FileIssue, InvalidFile, OutputRow,
    ValidationReport,
};
use snp_output::CsvOutputWriter;
use snp_standards::{BandTable, standard_bands};
use snp_transform::MetricCalculator;

use crate::error::Result;
use crate::observer::ConversionObserver;

/// Label used in the error list for failures of the final write.
pub const OUTPUT_ERROR_LABEL: &str = "output";

/// Converts batches of SnP files into one CSV table.
///
/// Files are processed in order. A file that fails is recorded in the result
/// and the batch moves on; only the final write decides overall success.
#[derive(Debug, Clone, Copy)]
pub struct ConversionService<'a> {
    bands: &'a BandTable,
}

impl Default for ConversionService<'_> {
    fn default() -> Self {
        Self::new(standard_bands())
    }
}

impl<'a> ConversionService<'a> {
    pub fn new(bands: &'a BandTable) -> Self {
        Self { bands }
    }

    /// Convert a single file into output rows.
    pub fn convert_file(
        &self,
        path: &Path,
        options: ConversionOptions,
        mapper: Option<&NotationMapper>,
    ) -> Result<Vec<OutputRow>> {
        let metadata = extract_metadata(path);
        if !metadata.is_complete() {
            tracing::debug!(
                file = %path.display(),
                missing = ?metadata.missing_fields(),
                "filename metadata incomplete, using placeholders"
            );
        }

        let touchstone = read_touchstone(path)?;
        tracing::debug!(
            header = %touchstone.header,
            points = touchstone.len(),
            "read touchstone data"
        );
        if touchstone.skipped_lines > 0 {
            tracing::warn!(
                file = %path.display(),
                skipped = touchstone.skipped_lines,
                "skipped malformed data lines"
            );
        }

        let rows = MetricCalculator::new(self.bands)
            .with_mapper(mapper)
            .with_options(options)
            .process(&touchstone.points, &metadata)?;
        Ok(rows)
    }

    /// Convert `files` and write every surviving row to `output_path`.
    pub fn convert(
        &self,
        files: &[PathBuf],
        output_path: &Path,
        options: ConversionOptions,
        mapper: Option<&NotationMapper>,
        observer: &mut dyn ConversionObserver,
    ) -> ConversionResult {
        let total_files = files.len();
        let span = tracing::info_span!(
            "convert",
            total_files,
            output = %output_path.display(),
            direction = %options.direction
        );
        let _guard = span.enter();

        let mut writer = CsvOutputWriter::new(output_path);
        let mut records = Vec::with_capacity(total_files);
        let mut errors = Vec::new();
        let mut cancelled = false;

        for (index, path) in files.iter().enumerate() {
            if observer.is_cancelled() {
                tracing::warn!(completed = index, total_files, "conversion cancelled");
                cancelled = true;
                break;
            }

            let name = display_name(path);
            let file_span = tracing::debug_span!("file", file = %name);
            let _file_guard = file_span.enter();

            match self.convert_file(path, options, mapper) {
                Ok(rows) => {
                    tracing::debug!(rows = rows.len(), "converted file");
                    records.push(ConversionRecord::converted(&name, rows.len()));
                    writer.push_rows(rows);
                }
                Err(error) => {
                    tracing::warn!(error = %error, "file conversion failed");
                    records.push(ConversionRecord::failed(&name, error.to_string()));
                    errors.push(FileIssue::new(&name, error.to_string()));
                }
            }

            observer.on_progress(index + 1, total_files, &name);
        }

        let files_processed = records.iter().filter(|record| record.success).count();
        let rows_generated = writer.len();

        if cancelled {
            writer.discard();
            return ConversionResult {
                success: false,
                files_processed,
                total_files,
                rows_generated: 0,
                output_path: None,
                output_size: 0,
                errors,
                records,
                cancelled: true,
            };
        }

        let result = match writer.flush() {
            Ok(summary) => ConversionResult {
                success: true,
                files_processed,
                total_files,
                rows_generated: summary.rows,
                output_path: Some(summary.path),
                output_size: summary.size_bytes,
                errors,
                records,
                cancelled: false,
            },
            Err(error) => {
                tracing::error!(error = %error, "failed to write output");
                errors.push(FileIssue::new(OUTPUT_ERROR_LABEL, error.to_string()));
                ConversionResult {
                    success: false,
                    files_processed,
                    total_files,
                    rows_generated,
                    output_path: None,
                    output_size: 0,
                    errors,
                    records,
                    cancelled: false,
                }
            }
        };

        tracing::info!(
            success = result.success,
            files_processed = result.files_processed,
            rows = result.rows_generated,
            errors = result.errors.len(),
            "conversion finished"
        );
        result
    }

    /// Check that each file exists and has a `.s1p`..`.s12p` extension.
    pub fn validate(&self, files: &[PathBuf]) -> ValidationReport {
        let mut report = ValidationReport::default();

        for path in files {
            let name = display_name(path);
            let metadata = match std::fs::metadata(path) {
                Ok(metadata) if metadata.is_file() => metadata,
                _ => {
                    report.invalid.push(InvalidFile {
                        file: name,
                        reason: "File does not exist".to_string(),
                    });
                    continue;
                }
            };
            if snp_port_count(path).is_err() {
                report.invalid.push(InvalidFile {
                    file: name,
                    reason: "Invalid SnP file extension".to_string(),
                });
                continue;
            }
            report.total_size += metadata.len();
            report.valid.push(path.clone());
        }

        tracing::debug!(
            valid = report.valid.len(),
            invalid = report.invalid.len(),
            total_size = report.total_size,
            "validated input files"
        );
        report
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoProgress;

    #[test]
    fn empty_batch_fails_on_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("out.csv");
        let result = ConversionService::default().convert(
            &[],
            &output,
            ConversionOptions::default(),
            None,
            &mut NoProgress,
        );
        assert!(!result.success);
        assert_eq!(result.total_files, 0);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].file, OUTPUT_ERROR_LABEL);
        assert!(!output.exists());
    }

    #[test]
    fn display_name_is_file_name() {
        assert_eq!(display_name(Path::new("/a/b/X_ANT1_B1.s2p")), "X_ANT1_B1.s2p");
    }
}
