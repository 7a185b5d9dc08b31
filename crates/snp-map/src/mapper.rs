//! The notation mapper.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::error::{MapperError, Result};
use crate::file::{MappingFile, MappingMetadata, MappingTable, SCHEMA_VERSION};

/// Outcome of a successful [`NotationMapper::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub count: usize,
    pub file_name: String,
    /// Set when the file declares a schema version other than the expected one.
    pub version_warning: Option<String>,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Loaded {} mappings from {}", self.count, self.file_name)?;
        if let Some(warning) = &self.version_warning {
            write!(f, " ({warning})")?;
        }
        Ok(())
    }
}

/// Translates raw band notation (e.g. `B41[CN]`) into a project-specific
/// label (e.g. `34_39+41`).
///
/// Lookups never fail: an unloaded mapper or an absent key returns the input
/// unchanged. Each distinct missing key is logged once and remembered.
#[derive(Debug, Default)]
pub struct NotationMapper {
    mappings: MappingTable,
    metadata: MappingMetadata,
    file_path: Option<PathBuf>,
    loaded: bool,
    load_errors: Vec<String>,
    missing_keys: Mutex<BTreeSet<String>>,
}

impl NotationMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a mapping table from a JSON file, replacing any previous state.
    ///
    /// On failure the mapper is left unloaded and the message is kept in
    /// [`load_errors`](Self::load_errors).
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        self.clear_state();
        match read_mapping_file(path) {
            Ok((file, version_warning)) => {
                let report = LoadReport {
                    count: file.mappings.len(),
                    file_name: file_name(path),
                    version_warning,
                };
                self.mappings = file.mappings;
                self.metadata = file.metadata;
                self.file_path = Some(path.to_path_buf());
                self.loaded = true;
                tracing::info!(
                    count = report.count,
                    file = %report.file_name,
                    "loaded band notation mappings"
                );
                Ok(report)
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to load mapping file");
                self.load_errors.push(err.to_string());
                Err(err)
            }
        }
    }

    /// Map an original notation, falling back to the original.
    ///
    /// An empty notation is never looked up or recorded as missing.
    pub fn map<'a>(&'a self, original: &'a str) -> &'a str {
        if !self.loaded || original.is_empty() {
            return original;
        }
        if let Some(mapped) = self.mappings.get(original) {
            return mapped;
        }

        let mut missing = self
            .missing_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if missing.insert(original.to_string()) {
            let source = self
                .file_path
                .as_deref()
                .map_or_else(|| "N/A".to_string(), file_name);
            tracing::warn!(
                key = original,
                mapping_file = %source,
                "no mapping found, using original value"
            );
        }
        original
    }

    /// Replace the table from memory. The mapper becomes loaded but not
    /// file-backed.
    pub fn set_mappings(&mut self, mappings: impl IntoIterator<Item = (String, String)>) {
        self.mappings = mappings.into_iter().collect();
        tracing::info!(count = self.mappings.len(), "mappings set directly");
        self.loaded = true;
        self.file_path = None;
        self.missing_keys_mut().clear();
    }

    /// Replace the table from a JSON object whose values must all be strings.
    ///
    /// On error the current state is kept.
    pub fn set_from_value(&mut self, value: &Value) -> Result<()> {
        let mappings = mappings_from_value(value)?;
        self.set_mappings(mappings);
        Ok(())
    }

    /// Reset to the unloaded state.
    pub fn clear(&mut self) {
        self.clear_state();
        tracing::info!("notation mapper cleared");
    }

    /// Write the current table as a mapping file.
    ///
    /// An existing file at `path` is renamed to `<path>.bak` first.
    pub fn save(&self, path: &Path) -> Result<PathBuf> {
        let file = MappingFile::new(self.mappings.clone(), self.metadata.clone());
        let json = serde_json::to_string_pretty(&file).map_err(MapperError::Serialize)?;

        if path.exists() {
            let mut backup = path.as_os_str().to_os_string();
            backup.push(".bak");
            let backup = PathBuf::from(backup);
            std::fs::rename(path, &backup).map_err(|source| MapperError::Write {
                path: backup.clone(),
                source,
            })?;
            tracing::debug!(backup = %backup.display(), "backed up existing mapping file");
        }

        std::fs::write(path, json).map_err(|source| MapperError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), count = self.mappings.len(), "saved mapping file");
        Ok(path.to_path_buf())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Source file of the current table, if it was loaded from disk.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn contains(&self, original: &str) -> bool {
        self.mappings.contains_key(original)
    }

    pub fn mappings(&self) -> &MappingTable {
        &self.mappings
    }

    pub fn metadata(&self) -> &MappingMetadata {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: MappingMetadata) {
        self.metadata = metadata;
    }

    /// Errors from the last load attempt.
    pub fn load_errors(&self) -> &[String] {
        &self.load_errors
    }

    /// Keys requested through [`map`](Self::map) that had no entry.
    pub fn missing_keys(&self) -> BTreeSet<String> {
        self.missing_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn missing_keys_mut(&mut self) -> &mut BTreeSet<String> {
        self.missing_keys
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn clear_state(&mut self) {
        self.mappings.clear();
        self.metadata = MappingMetadata::default();
        self.file_path = None;
        self.loaded = false;
        self.load_errors.clear();
        self.missing_keys_mut().clear();
    }
}

impl fmt::Display for NotationMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.loaded {
            return f.write_str("NotationMapper(not loaded)");
        }
        let source = self
            .file_path
            .as_deref()
            .map_or_else(|| "memory".to_string(), file_name);
        write!(
            f,
            "NotationMapper({} mappings, source={source})",
            self.mappings.len()
        )
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_mapping_file(path: &Path) -> Result<(MappingFile, Option<String>)> {
    if !path.exists() {
        return Err(MapperError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(MapperError::InvalidExtension {
            path: path.to_path_buf(),
            extension: path
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| MapperError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data: Value = serde_json::from_str(&contents).map_err(|source| MapperError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    let version = data.get("version").and_then(Value::as_str).unwrap_or_default();
    let version_warning = (version != SCHEMA_VERSION).then(|| {
        let message = format!("schema version mismatch: '{version}' (expected {SCHEMA_VERSION})");
        tracing::warn!(path = %path.display(), "{message}");
        message
    });

    let mappings_value = data.get("mappings").ok_or(MapperError::MissingMappings)?;
    let mappings = mappings_from_value(mappings_value)?;

    let text = |key: &str| {
        data.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let metadata = MappingMetadata {
        description: text("description"),
        project: text("project"),
        created_date: text("created_date"),
    };

    Ok((
        MappingFile {
            version: version.to_string(),
            metadata,
            mappings,
        },
        version_warning,
    ))
}

fn mappings_from_value(value: &Value) -> Result<MappingTable> {
    let object = value.as_object().ok_or(MapperError::MappingsNotObject)?;

    let invalid: Vec<String> = object
        .iter()
        .filter(|(_, v)| !v.is_string())
        .map(|(k, v)| format!("{k}: {v}"))
        .collect();
    if !invalid.is_empty() {
        return Err(MapperError::NonStringEntries {
            count: invalid.len(),
            entries: invalid.into_iter().take(3).collect(),
        });
    }

    Ok(object
        .iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded(entries: &[(&str, &str)]) -> NotationMapper {
        let mut mapper = NotationMapper::new();
        mapper.set_mappings(
            entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        );
        mapper
    }

    #[test]
    fn unloaded_mapper_returns_input() {
        let mapper = NotationMapper::new();
        assert_eq!(mapper.map("B41[CN]"), "B41[CN]");
        assert!(mapper.missing_keys().is_empty());
        assert_eq!(mapper.to_string(), "NotationMapper(not loaded)");
    }

    #[test]
    fn maps_known_keys() {
        let mapper = loaded(&[("B41[CN]", "34_39+41")]);
        assert_eq!(mapper.map("B41[CN]"), "34_39+41");
        assert!(mapper.contains("B41[CN]"));
        assert!(mapper.file_path().is_none());
    }

    #[test]
    fn missing_keys_recorded_once() {
        let mapper = loaded(&[("B1", "TM01_A")]);
        assert_eq!(mapper.map("B3"), "B3");
        assert_eq!(mapper.map("B3"), "B3");
        assert_eq!(mapper.map("B7"), "B7");
        let missing: Vec<_> = mapper.missing_keys().into_iter().collect();
        assert_eq!(missing, vec!["B3", "B7"]);
    }

    #[test]
    fn empty_notation_is_not_recorded() {
        let mapper = loaded(&[("B1", "TM01_A")]);
        assert_eq!(mapper.map(""), "");
        assert!(mapper.missing_keys().is_empty());
    }

    #[test]
    fn replacing_table_discards_missing_keys() {
        let mut mapper = loaded(&[("B1", "TM01_A")]);
        mapper.map("B3");
        mapper.set_mappings(MappingTable::new());
        assert!(mapper.missing_keys().is_empty());
        assert!(mapper.is_loaded());
    }

    #[test]
    fn set_from_value_rejects_non_strings() {
        let mut mapper = loaded(&[("B1", "TM01_A")]);
        let err = mapper
            .set_from_value(&json!({"B1": "x", "B3": 7}))
            .unwrap_err();
        assert!(matches!(err, MapperError::NonStringEntries { count: 1, .. }));
        assert_eq!(mapper.map("B1"), "TM01_A");

        mapper.set_from_value(&json!({"B3": "y"})).unwrap();
        assert_eq!(mapper.map("B3"), "y");
        assert_eq!(mapper.len(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut mapper = loaded(&[("B1", "TM01_A")]);
        mapper.map("B9");
        mapper.clear();
        assert!(!mapper.is_loaded());
        assert!(mapper.is_empty());
        assert!(mapper.missing_keys().is_empty());
        assert_eq!(mapper.map("B1"), "B1");
    }
}
