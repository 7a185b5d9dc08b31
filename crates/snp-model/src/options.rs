//! Configuration options for SnP conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which half of a band a measurement belongs to.
///
/// Receive measurements are filtered to the downlink range, transmit
/// measurements to the uplink range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkDirection {
    /// Downlink (receive path).
    #[default]
    Rx,
    /// Uplink (transmit path).
    Tx,
}

impl LinkDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rx => "rx",
            Self::Tx => "tx",
        }
    }
}

impl fmt::Display for LinkDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling a batch conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Restrict rows to the band's frequency range.
    pub freq_filter: bool,
    /// Resolve the band from the filename. Filtering needs both flags.
    pub auto_band: bool,
    /// Range used when filtering.
    pub direction: LinkDirection,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            freq_filter: true,
            auto_band: true,
            direction: LinkDirection::Rx,
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable band filtering and keep the full sweep.
    pub fn full_sweep() -> Self {
        Self {
            freq_filter: false,
            ..Self::default()
        }
    }

    pub fn with_freq_filter(mut self, enable: bool) -> Self {
        self.freq_filter = enable;
        self
    }

    pub fn with_auto_band(mut self, enable: bool) -> Self {
        self.auto_band = enable;
        self
    }

    pub fn with_direction(mut self, direction: LinkDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Whether rows are filtered to the band range.
    pub fn filters_by_band(&self) -> bool {
        self.freq_filter && self.auto_band
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtering_requires_both_flags() {
        assert!(ConversionOptions::default().filters_by_band());
        assert!(!ConversionOptions::full_sweep().filters_by_band());
        assert!(
            !ConversionOptions::default()
                .with_auto_band(false)
                .filters_by_band()
        );
    }

    #[test]
    fn direction_displays_lowercase() {
        assert_eq!(LinkDirection::Rx.to_string(), "rx");
        assert_eq!(LinkDirection::Tx.to_string(), "tx");
    }
}
