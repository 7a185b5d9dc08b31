//! On-disk mapping file layout.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Schema version written to and expected from mapping files.
pub const SCHEMA_VERSION: &str = "1.0";

/// Original notation to mapped label, in file order.
pub type MappingTable = IndexMap<String, String>;

/// Free-text fields carried alongside the mappings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingMetadata {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub created_date: String,
}

impl MappingMetadata {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.project.is_empty() && self.created_date.is_empty()
    }
}

/// Serialized form of a mapping table.
///
/// ```json
/// {"version": "1.0", "description": "", "project": "", "created_date": "",
///  "mappings": {"B41[CN]": "34_39+41"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingFile {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(flatten)]
    pub metadata: MappingMetadata,
    pub mappings: MappingTable,
}

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

impl MappingFile {
    pub fn new(mappings: MappingTable, metadata: MappingMetadata) -> Self {
        Self {
            version: default_version(),
            metadata,
            mappings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_metadata() {
        let mut mappings = MappingTable::new();
        mappings.insert("B1".to_string(), "TM01_A".to_string());
        let file = MappingFile::new(
            mappings,
            MappingMetadata {
                project: "P1".to_string(),
                ..MappingMetadata::default()
            },
        );
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["project"], "P1");
        assert_eq!(json["mappings"]["B1"], "TM01_A");
    }
}
