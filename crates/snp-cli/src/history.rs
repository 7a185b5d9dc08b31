//! Conversion history log.
//!
//! Each `convert` run appends one entry to a JSON file in the user's home
//! directory (`~/.snp-convert/conversion_history.json`). Only the newest
//! [`MAX_ENTRIES`] entries are kept.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use snp_model::{ConversionResult, FileIssue};

/// Entries kept in the history file.
pub const MAX_ENTRIES: usize = 100;

const HISTORY_DIR: &str = ".snp-convert";
const HISTORY_FILENAME: &str = "conversion_history.json";

/// One recorded conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    pub files_processed: usize,
    pub total_files: usize,
    pub rows_generated: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    pub output_size_kb: f64,
    #[serde(default)]
    pub errors: Vec<FileIssue>,
}

impl HistoryEntry {
    pub fn from_result(result: &ConversionResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            success: result.success,
            files_processed: result.files_processed,
            total_files: result.total_files,
            rows_generated: result.rows_generated,
            output_path: result.output_path.clone(),
            output_size_kb: result.output_size_kb(),
            errors: result.errors.clone(),
        }
    }
}

/// Default history file location.
///
/// Returns `None` if the home directory cannot be determined.
pub fn default_history_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(HISTORY_DIR).join(HISTORY_FILENAME))
}

/// Read all entries, oldest first.
///
/// A missing file is an empty history.
pub fn load_history(path: &Path) -> io::Result<Vec<HistoryEntry>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => return Err(error),
    };
    serde_json::from_str(&content).map_err(io::Error::other)
}

/// Append `entry` and trim the file to the newest [`MAX_ENTRIES`].
///
/// An unreadable existing file is replaced rather than blocking the append.
pub fn append_entry(path: &Path, entry: HistoryEntry) -> io::Result<()> {
    let mut entries = match load_history(path) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "discarding unreadable history file");
            Vec::new()
        }
    };
    entries.push(entry);
    if entries.len() > MAX_ENTRIES {
        let excess = entries.len() - MAX_ENTRIES;
        entries.drain(..excess);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(&entries).map_err(io::Error::other)?;
    fs::write(path, content)?;

    tracing::debug!(path = %path.display(), entries = entries.len(), "updated conversion history");
    Ok(())
}

/// Newest entries first, at most `limit`.
pub fn recent(entries: &[HistoryEntry], limit: usize) -> impl Iterator<Item = &HistoryEntry> {
    entries.iter().rev().take(limit)
}
