//! Batch conversion and validation results.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A failure tied to one input file (or to the output stage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIssue {
    pub file: String,
    pub error: String,
}

impl FileIssue {
    pub fn new(file: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            error: error.into(),
        }
    }
}

/// Outcome of converting one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub file: String,
    pub success: bool,
    pub rows: usize,
    pub error: Option<String>,
}

impl ConversionRecord {
    pub fn converted(file: impl Into<String>, rows: usize) -> Self {
        Self {
            file: file.into(),
            success: true,
            rows,
            error: None,
        }
    }

    pub fn failed(file: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            success: false,
            rows: 0,
            error: Some(error.into()),
        }
    }
}

/// Aggregate result of one batch conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub success: bool,
    pub files_processed: usize,
    pub total_files: usize,
    pub rows_generated: usize,
    pub output_path: Option<PathBuf>,
    /// Output size in bytes.
    pub output_size: u64,
    pub errors: Vec<FileIssue>,
    #[serde(default)]
    pub records: Vec<ConversionRecord>,
    #[serde(default)]
    pub cancelled: bool,
}

impl ConversionResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Percentage of input files that converted.
    pub fn success_rate(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }
        self.files_processed as f64 / self.total_files as f64 * 100.0
    }

    pub fn output_size_kb(&self) -> f64 {
        self.output_size as f64 / 1024.0
    }

    pub fn output_size_mb(&self) -> f64 {
        self.output_size as f64 / (1024.0 * 1024.0)
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.success { "SUCCESS" } else { "FAILED" };
        writeln!(f, "{status}")?;
        writeln!(
            f,
            "Files: {}/{} ({:.1}%)",
            self.files_processed,
            self.total_files,
            self.success_rate()
        )?;
        writeln!(f, "Rows: {}", self.rows_generated)?;
        writeln!(f, "Output: {:.1} KB", self.output_size_kb())?;
        write!(f, "Errors: {}", self.errors.len())
    }
}

/// A file rejected by pre-conversion validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidFile {
    pub file: String,
    pub reason: String,
}

/// Result of validating a list of input files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: Vec<PathBuf>,
    pub invalid: Vec<InvalidFile>,
    /// Combined size of the valid files in bytes.
    pub total_size: u64,
}

impl ValidationReport {
    pub fn file_count(&self) -> usize {
        self.valid.len()
    }

    pub fn total_size_mb(&self) -> f64 {
        self.total_size as f64 / (1024.0 * 1024.0)
    }

    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}
