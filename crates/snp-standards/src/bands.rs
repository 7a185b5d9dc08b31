#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use snp_model::LinkDirection;

/// Closed frequency interval in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyRange {
    pub min_mhz: f64,
    pub max_mhz: f64,
}

impl FrequencyRange {
    pub const fn new(min_mhz: f64, max_mhz: f64) -> Self {
        Self { min_mhz, max_mhz }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, frequency_mhz: f64) -> bool {
        frequency_mhz >= self.min_mhz && frequency_mhz <= self.max_mhz
    }

    pub fn width(&self) -> f64 {
        self.max_mhz - self.min_mhz
    }
}

impl fmt::Display for FrequencyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} MHz", self.min_mhz, self.max_mhz)
    }
}

/// Duplexing scheme of a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Duplex {
    /// Paired uplink and downlink ranges.
    Fdd,
    /// One range shared by both directions.
    Tdd,
    /// Downlink only.
    Sdl,
}

impl fmt::Display for Duplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Fdd => "FDD",
            Self::Tdd => "TDD",
            Self::Sdl => "SDL",
        };
        f.write_str(label)
    }
}

/// Uplink and downlink ranges of one band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandDefinition {
    pub name: String,
    pub uplink: Option<FrequencyRange>,
    pub downlink: FrequencyRange,
    pub duplex: Duplex,
}

impl BandDefinition {
    pub fn fdd(name: impl Into<String>, uplink: (f64, f64), downlink: (f64, f64)) -> Self {
        Self {
            name: name.into(),
            uplink: Some(FrequencyRange::new(uplink.0, uplink.1)),
            downlink: FrequencyRange::new(downlink.0, downlink.1),
            duplex: Duplex::Fdd,
        }
    }

    pub fn tdd(name: impl Into<String>, range: (f64, f64)) -> Self {
        let range = FrequencyRange::new(range.0, range.1);
        Self {
            name: name.into(),
            uplink: Some(range),
            downlink: range,
            duplex: Duplex::Tdd,
        }
    }

    pub fn sdl(name: impl Into<String>, downlink: (f64, f64)) -> Self {
        Self {
            name: name.into(),
            uplink: None,
            downlink: FrequencyRange::new(downlink.0, downlink.1),
            duplex: Duplex::Sdl,
        }
    }

    /// Range used for a measurement direction. Supplemental downlink bands
    /// have no uplink range.
    pub fn range(&self, direction: LinkDirection) -> Option<FrequencyRange> {
        match direction {
            LinkDirection::Rx => Some(self.downlink),
            LinkDirection::Tx => self.uplink,
        }
    }
}

// (name, uplink, downlink) in MHz.
const FDD_BANDS: &[(&str, (f64, f64), (f64, f64))] = &[
    ("GSM850", (824.0, 849.0), (869.0, 894.0)),
    ("GSM900", (890.0, 915.0), (935.0, 960.0)),
    ("DCS", (1710.0, 1785.0), (1805.0, 1880.0)),
    ("PCS", (1850.0, 1910.0), (1930.0, 1990.0)),
    ("B1", (1920.0, 1980.0), (2110.0, 2170.0)),
    ("B2", (1850.0, 1910.0), (1930.0, 1990.0)),
    ("B3", (1710.0, 1785.0), (1805.0, 1880.0)),
    ("B4", (1710.0, 1755.0), (2110.0, 2155.0)),
    ("B5", (824.0, 849.0), (869.0, 894.0)),
    ("B7", (2500.0, 2570.0), (2620.0, 2690.0)),
    ("B8", (880.0, 915.0), (925.0, 960.0)),
    ("B11", (1427.9, 1447.9), (1475.9, 1495.9)),
    ("B12", (699.0, 716.0), (729.0, 746.0)),
    ("B13", (777.0, 787.0), (746.0, 756.0)),
    ("B14", (788.0, 798.0), (758.0, 768.0)),
    ("B17", (704.0, 716.0), (734.0, 746.0)),
    ("B18", (815.0, 830.0), (860.0, 875.0)),
    ("B19", (830.0, 845.0), (875.0, 890.0)),
    ("B20", (832.0, 862.0), (791.0, 821.0)),
    ("B21", (1447.9, 1462.9), (1495.9, 1510.9)),
    ("B24", (1626.5, 1660.5), (1525.0, 1559.0)),
    ("B25", (1850.0, 1915.0), (1930.0, 1995.0)),
    ("B26", (814.0, 849.0), (859.0, 894.0)),
    ("B28", (703.0, 748.0), (758.0, 803.0)),
    ("B30", (2305.0, 2315.0), (2350.0, 2360.0)),
    ("B31", (452.5, 457.5), (462.5, 467.5)),
    ("B65", (1920.0, 2010.0), (2110.0, 2200.0)),
    ("B66", (1710.0, 1780.0), (2110.0, 2200.0)),
    ("B68", (698.0, 728.0), (753.0, 783.0)),
    ("B70", (1695.0, 1710.0), (1995.0, 2020.0)),
    ("B71", (663.0, 698.0), (617.0, 652.0)),
    ("B72", (451.0, 456.0), (461.0, 466.0)),
    ("B73", (450.0, 455.0), (460.0, 465.0)),
    ("B74", (1427.0, 1470.0), (1475.0, 1518.0)),
    ("B85", (698.0, 716.0), (728.0, 746.0)),
    ("B87", (410.0, 415.0), (420.0, 425.0)),
    ("B88", (412.0, 417.0), (422.0, 427.0)),
];

const TDD_BANDS: &[(&str, (f64, f64))] = &[
    ("B33", (1900.0, 1920.0)),
    ("B34", (2010.0, 2025.0)),
    ("B35", (1850.0, 1910.0)),
    ("B36", (1930.0, 1990.0)),
    ("B37", (1910.0, 1930.0)),
    ("B38", (2570.0, 2620.0)),
    ("B39", (1880.0, 1920.0)),
    ("B40", (2300.0, 2400.0)),
    ("B41", (2496.0, 2690.0)),
    ("B42", (3400.0, 3600.0)),
    ("B43", (3600.0, 3800.0)),
    ("B44", (703.0, 803.0)),
    ("B45", (1447.0, 1467.0)),
    ("B46", (5150.0, 5925.0)),
    ("B47", (5855.0, 5925.0)),
    ("B48", (3550.0, 3700.0)),
    ("B50", (1432.0, 1517.0)),
    ("B51", (1427.0, 1432.0)),
    ("B52", (3300.0, 3400.0)),
    ("B53", (2483.5, 2495.0)),
];

const SDL_BANDS: &[(&str, (f64, f64))] = &[
    ("B29", (717.0, 728.0)),
    ("B32", (1452.0, 1496.0)),
    ("B67", (738.0, 758.0)),
    ("B69", (2570.0, 2620.0)),
    ("B75", (1432.0, 1517.0)),
    ("B76", (1427.0, 1432.0)),
];

const ALIASES: &[(&str, &str)] = &[("GSM1800", "DCS"), ("GSM1900", "PCS")];

static STANDARD_BANDS: LazyLock<BandTable> = LazyLock::new(BandTable::standard);

/// The built-in registry.
pub fn standard_bands() -> &'static BandTable {
    &STANDARD_BANDS
}

/// Band name to frequency range lookup.
///
/// Names are matched case-insensitively after trimming.
#[derive(Debug, Clone, Default)]
pub struct BandTable {
    bands: BTreeMap<String, BandDefinition>,
    aliases: BTreeMap<String, String>,
}

impl BandTable {
    /// An empty table, for callers that supply their own band plan.
    pub fn empty() -> Self {
        Self::default()
    }

    /// GSM aliases plus the numbered 3GPP FDD, TDD and SDL bands.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        for (name, uplink, downlink) in FDD_BANDS {
            table.insert(BandDefinition::fdd(*name, *uplink, *downlink));
        }
        for (name, range) in TDD_BANDS {
            table.insert(BandDefinition::tdd(*name, *range));
        }
        for (name, downlink) in SDL_BANDS {
            table.insert(BandDefinition::sdl(*name, *downlink));
        }
        for (alias, target) in ALIASES {
            table.aliases.insert((*alias).to_string(), (*target).to_string());
        }
        table
    }

    /// Add or replace a band definition.
    pub fn insert(&mut self, band: BandDefinition) {
        self.bands.insert(normalize_name(&band.name), band);
    }

    #[must_use]
    pub fn with_band(mut self, band: BandDefinition) -> Self {
        self.insert(band);
        self
    }

    pub fn get(&self, name: &str) -> Option<&BandDefinition> {
        let key = normalize_name(name);
        let key = self.aliases.get(&key).unwrap_or(&key);
        self.bands.get(key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Downlink range for `Rx`, uplink range for `Tx`.
    ///
    /// Returns `None` for unknown bands and for the uplink of downlink-only
    /// bands; callers then leave their rows unfiltered.
    pub fn range_for(&self, name: &str, direction: LinkDirection) -> Option<FrequencyRange> {
        self.get(name).and_then(|band| band.range(direction))
    }

    pub fn all(&self) -> impl Iterator<Item = &BandDefinition> {
        self.bands.values()
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}
