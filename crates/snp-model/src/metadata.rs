//! Measurement metadata derived from filenames.

use serde::{Deserialize, Serialize};

/// Metadata extracted from a measurement filename.
///
/// Every field is optional. A filename that only partially follows the
/// naming convention still yields the fields that could be matched, and
/// consumers decide which placeholders to use for the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Input port label (e.g. "ANT1").
    pub port_in: Option<String>,
    /// Primary band (e.g. "B41").
    pub band: Option<String>,
    /// Raw carrier-aggregation notation including any bracket (e.g. "B41[NA]").
    pub ca_config: Option<String>,
    /// Output port label (e.g. "RXOUT3").
    pub port_out: Option<String>,
    /// LNA gain state (e.g. "G0_H").
    pub lna_state: Option<String>,
}

impl FileMetadata {
    /// Returns true when every field was matched.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the fields that were not matched.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.port_in.is_none() {
            missing.push("port_in");
        }
        if self.band.is_none() {
            missing.push("band");
        }
        if self.ca_config.is_none() {
            missing.push("ca_config");
        }
        if self.port_out.is_none() {
            missing.push("port_out");
        }
        if self.lna_state.is_none() {
            missing.push("lna_state");
        }
        missing
    }

    /// The raw CA notation, falling back to the band, then to an empty string.
    pub fn ca_config_or_band(&self) -> &str {
        self.ca_config
            .as_deref()
            .or(self.band.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_metadata_reports_all_fields_missing() {
        let meta = FileMetadata::default();
        assert!(!meta.is_complete());
        assert_eq!(
            meta.missing_fields(),
            vec!["port_in", "band", "ca_config", "port_out", "lna_state"]
        );
        assert_eq!(meta.ca_config_or_band(), "");
    }

    #[test]
    fn ca_config_falls_back_to_band() {
        let meta = FileMetadata {
            band: Some("B3".to_string()),
            ..FileMetadata::default()
        };
        assert_eq!(meta.ca_config_or_band(), "B3");
    }
}
