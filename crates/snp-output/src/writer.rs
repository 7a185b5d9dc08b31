//! Buffered CSV writer.
//!
//! Rows from every file in a batch are held in memory and written in one
//! pass when the batch ends. The table is written to a temporary file next to
//! the target and renamed into place, so a failed write never leaves a
//! partial table.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::{Column, CsvWriter, DataFrame, NamedFrom, SerWriter, Series};
use serde::Serialize;
use snp_model::{OUTPUT_COLUMNS, OutputRow};
use tempfile::NamedTempFile;

use crate::error::{OutputError, Result};

/// What a flush wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub size_bytes: u64,
}

/// Collects output rows and writes them as a single CSV table.
#[derive(Debug)]
pub struct CsvOutputWriter {
    path: PathBuf,
    rows: Vec<OutputRow>,
}

impl CsvOutputWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rows: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn push_rows(&mut self, rows: impl IntoIterator<Item = OutputRow>) {
        self.rows.extend(rows);
    }

    /// Number of rows buffered so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop everything buffered without writing.
    pub fn discard(&mut self) {
        self.rows.clear();
    }

    /// Write all buffered rows with a header, creating parent directories.
    ///
    /// An empty buffer is an error and leaves the filesystem untouched.
    pub fn flush(&mut self) -> Result<WriteSummary> {
        if self.rows.is_empty() {
            return Err(OutputError::NoRows {
                path: self.path.clone(),
            });
        }

        let mut df = rows_to_dataframe(&self.rows)?;
        let dir = ensure_parent_dir(&self.path)?;

        let mut staged = NamedTempFile::new_in(&dir).map_err(|source| OutputError::CreateFile {
            path: dir.clone(),
            source,
        })?;
        CsvWriter::new(staged.as_file_mut())
            .include_header(true)
            .finish(&mut df)
            .map_err(|source| OutputError::Write {
                path: self.path.clone(),
                source,
            })?;
        staged
            .persist(&self.path)
            .map_err(|err| OutputError::Persist {
                path: self.path.clone(),
                source: err.error,
            })?;

        let size_bytes = fs::metadata(&self.path)
            .map_err(|source| OutputError::Metadata {
                path: self.path.clone(),
                source,
            })?
            .len();
        let summary = WriteSummary {
            path: self.path.clone(),
            rows: self.rows.len(),
            size_bytes,
        };
        self.rows.clear();

        tracing::info!(
            path = %summary.path.display(),
            rows = summary.rows,
            size_bytes = summary.size_bytes,
            "wrote output table"
        );
        Ok(summary)
    }
}

/// Create the target's directory and return it (`.` for a bare file name).
fn ensure_parent_dir(path: &Path) -> Result<PathBuf> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
            Ok(parent.to_path_buf())
        }
        _ => Ok(PathBuf::from(".")),
    }
}

fn text_column(name: &str, rows: &[OutputRow], field: impl Fn(&OutputRow) -> &str) -> Column {
    let values: Vec<&str> = rows.iter().map(field).collect();
    Series::new(name.into(), values).into()
}

/// NaN metrics become nulls so they are written as empty cells.
fn metric_column(name: &str, rows: &[OutputRow], index: usize) -> Column {
    let values: Vec<Option<f64>> = rows.iter().map(|row| row.metrics()[index]).collect();
    Series::new(name.into(), values).into()
}

/// Build the output table in column order.
pub fn rows_to_dataframe(rows: &[OutputRow]) -> Result<DataFrame> {
    let [
        freq_type,
        rat,
        cfg_band,
        debug_band,
        frequency,
        active_rf_path,
        gain,
        reverse,
        input_rl,
        output_rl,
        lna_gain_state,
        active_port_1,
        active_port_2,
        ca_config,
        nplexer_bank,
    ] = OUTPUT_COLUMNS;

    let frequencies: Vec<f64> = rows.iter().map(|row| row.frequency).collect();

    DataFrame::new(vec![
        text_column(freq_type, rows, |r| r.freq_type.as_str()),
        text_column(rat, rows, |r| r.rat.as_str()),
        text_column(cfg_band, rows, |r| r.cfg_band.as_str()),
        text_column(debug_band, rows, |r| r.debug_band.as_str()),
        Series::new(frequency.into(), frequencies).into(),
        text_column(active_rf_path, rows, |r| r.active_rf_path.as_str()),
        metric_column(gain, rows, 0),
        metric_column(reverse, rows, 1),
        metric_column(input_rl, rows, 2),
        metric_column(output_rl, rows, 3),
        text_column(lna_gain_state, rows, |r| r.lna_gain_state.as_str()),
        text_column(active_port_1, rows, |r| r.active_port_1.as_str()),
        text_column(active_port_2, rows, |r| r.active_port_2.as_str()),
        text_column(ca_config, rows, |r| r.ca_config.as_str()),
        text_column(nplexer_bank, rows, |r| r.nplexer_bank.as_str()),
    ])
    .map_err(OutputError::DataFrame)
}
