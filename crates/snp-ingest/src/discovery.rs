//! SnP file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Highest port count accepted in a `.s<N>p` extension.
pub const MAX_PORTS: usize = 12;

/// Port count declared by a `.s<N>p` extension (case-insensitive, N in 1..=12).
pub fn snp_port_count(path: &Path) -> Result<usize> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    let unsupported = || IngestError::UnsupportedExtension {
        path: path.to_path_buf(),
        extension: format!(".{extension}"),
    };

    let lower = extension.to_ascii_lowercase();
    let digits = lower
        .strip_prefix('s')
        .and_then(|rest| rest.strip_suffix('p'))
        .ok_or_else(unsupported)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unsupported());
    }

    match digits.parse::<usize>() {
        Ok(ports) if (1..=MAX_PORTS).contains(&ports) => Ok(ports),
        _ => Err(unsupported()),
    }
}

/// Whether the path has a supported SnP extension.
pub fn is_snp_path(path: &Path) -> bool {
    snp_port_count(path).is_ok()
}

/// Lists all SnP files in a directory.
///
/// Returns files sorted by filename.
pub fn list_snp_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if path.is_file() && is_snp_path(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Expand command-line inputs into an ordered file list.
///
/// Directories contribute their SnP files (sorted); other paths are passed
/// through as given so that missing or unsupported files surface as per-file
/// errors later.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = list_snp_files(input)?;
            tracing::debug!(dir = %input.display(), count = found.len(), "scanned directory");
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}
