//! Static reference data for SnP conversion.
//!
//! Currently the band registry: uplink and downlink ranges (MHz) for GSM
//! aliases and numbered 3GPP E-UTRA bands.

pub mod bands;

pub use bands::{BandDefinition, BandTable, Duplex, FrequencyRange, standard_bands};
