//! Validation of hand-edited mapping rows before they are applied or saved.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::file::MappingTable;

/// One editable row: original notation and its mapped label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub original: String,
    pub mapped: String,
}

impl MappingEntry {
    pub fn new(original: impl Into<String>, mapped: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            mapped: mapped.into(),
        }
    }
}

/// Problem found in a row. Row numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EntryIssue {
    EmptyOriginal { row: usize },
    EmptyMapped { row: usize },
    Duplicate {
        row: usize,
        original: String,
        first_row: usize,
    },
}

impl EntryIssue {
    pub fn row(&self) -> usize {
        match self {
            Self::EmptyOriginal { row } | Self::EmptyMapped { row } | Self::Duplicate { row, .. } => {
                *row
            }
        }
    }
}

impl fmt::Display for EntryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOriginal { row } => write!(f, "Row {row}: original band is empty"),
            Self::EmptyMapped { row } => write!(f, "Row {row}: mapped value is empty"),
            Self::Duplicate {
                row,
                original,
                first_row,
            } => write!(
                f,
                "Row {row}: duplicate original band \"{original}\" (already in row {first_row})"
            ),
        }
    }
}

/// Check rows for empty fields and duplicate originals.
///
/// Values are compared after trimming. Each row reports at most one issue.
pub fn validate_entries(entries: &[MappingEntry]) -> Vec<EntryIssue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let row = index + 1;
        let original = entry.original.trim();
        if original.is_empty() {
            issues.push(EntryIssue::EmptyOriginal { row });
            continue;
        }
        if entry.mapped.trim().is_empty() {
            issues.push(EntryIssue::EmptyMapped { row });
            continue;
        }
        if let Some(&first_row) = seen.get(original) {
            issues.push(EntryIssue::Duplicate {
                row,
                original: original.to_string(),
                first_row,
            });
            continue;
        }
        seen.insert(original, row);
    }

    issues
}

/// Collect rows into a table in row order, skipping rows with an empty side.
pub fn entries_to_mappings(entries: &[MappingEntry]) -> MappingTable {
    entries
        .iter()
        .map(|e| (e.original.trim(), e.mapped.trim()))
        .filter(|(original, mapped)| !original.is_empty() && !mapped.is_empty())
        .map(|(original, mapped)| (original.to_string(), mapped.to_string()))
        .collect()
}
