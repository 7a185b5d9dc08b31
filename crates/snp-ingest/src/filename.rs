//! Metadata from measurement filenames.
//!
//! Filenames follow `<prefix>_<PORT_IN>_<BAND>[<CA>]@<OUT>_(<LNA>).s<N>p`,
//! with the bracket and `@` suffix optional. Fields that do not match are
//! left as `None`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use snp_model::FileMetadata;

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.s\d{1,2}p$").expect("valid extension regex"));

static BAND_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<ca>(?P<band>B\d+)(?:\[[^\]]*\])?)(?:@(?P<out>\d+))?")
        .expect("valid band regex")
});

static LNA_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("valid LNA regex"));

static SPLIT_GAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(G\d+)([HL])$").expect("valid gain regex"));

/// Extract metadata from a path or bare filename.
pub fn extract_metadata(path: &Path) -> FileMetadata {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = EXTENSION.replace(&file_name, "");
    extract_from_stem(&stem)
}

fn extract_from_stem(stem: &str) -> FileMetadata {
    let mut metadata = FileMetadata::default();
    let parts: Vec<&str> = stem.split('_').collect();

    if let Some(port_in) = parts.get(1).filter(|p| !p.is_empty()) {
        metadata.port_in = Some((*port_in).to_string());
    }

    if let Some(caps) = parts.iter().find_map(|part| BAND_TOKEN.captures(part)) {
        metadata.band = caps.name("band").map(|m| m.as_str().to_string());
        metadata.ca_config = caps.name("ca").map(|m| m.as_str().to_string());
        metadata.port_out = caps.name("out").map(|m| format!("RXOUT{}", m.as_str()));
    }

    if let Some(caps) = LNA_TOKEN.captures(stem) {
        let raw = &caps[1];
        let state = match SPLIT_GAIN.captures(raw) {
            Some(gain) => format!("{}_{}", &gain[1], &gain[2]),
            None => raw.to_string(),
        };
        metadata.lna_state = Some(state);
    }

    tracing::trace!(stem, ?metadata, "extracted filename metadata");
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str) -> FileMetadata {
        extract_metadata(Path::new(name))
    }

    #[test]
    fn simple_band_with_output_port() {
        let m = meta("X_ANT1_B1@1_(G0H).s2p");
        assert_eq!(m.port_in.as_deref(), Some("ANT1"));
        assert_eq!(m.band.as_deref(), Some("B1"));
        assert_eq!(m.ca_config.as_deref(), Some("B1"));
        assert_eq!(m.port_out.as_deref(), Some("RXOUT1"));
        assert_eq!(m.lna_state.as_deref(), Some("G0_H"));
    }

    #[test]
    fn ca_bracket_is_kept_verbatim() {
        let m = meta("X_ANT1_B41[NA]@3_(G0).s2p");
        assert_eq!(m.band.as_deref(), Some("B41"));
        assert_eq!(m.ca_config.as_deref(), Some("B41[NA]"));
        assert_eq!(m.port_out.as_deref(), Some("RXOUT3"));
        assert_eq!(m.lna_state.as_deref(), Some("G0"));
    }

    #[test]
    fn low_gain_state_is_split() {
        let m = meta("X_ANT1_B3[B7]@1_(G0L).s2p");
        assert_eq!(m.ca_config.as_deref(), Some("B3[B7]"));
        assert_eq!(m.lna_state.as_deref(), Some("G0_L"));
    }

    #[test]
    fn directory_and_uppercase_extension_are_stripped() {
        let m = meta("/data/run2/X_ANT2_B41@2_(G1).S2P");
        assert_eq!(m.port_in.as_deref(), Some("ANT2"));
        assert_eq!(m.band.as_deref(), Some("B41"));
        assert_eq!(m.lna_state.as_deref(), Some("G1"));
    }

    #[test]
    fn missing_fields_stay_absent() {
        let m = meta("sweep.s2p");
        assert_eq!(m, FileMetadata::default());

        let m = meta("X_ANT3_noband.s4p");
        assert_eq!(m.port_in.as_deref(), Some("ANT3"));
        assert!(m.band.is_none());
        assert!(m.port_out.is_none());
        assert!(m.lna_state.is_none());
    }

    #[test]
    fn band_without_output_port() {
        let m = meta("X_ANT4_B7_(G2H).s2p");
        assert_eq!(m.band.as_deref(), Some("B7"));
        assert!(m.port_out.is_none());
        assert_eq!(m.lna_state.as_deref(), Some("G2_H"));
    }
}
