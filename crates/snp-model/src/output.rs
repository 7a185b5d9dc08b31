//! Output row schema.

use serde::{Deserialize, Serialize};

/// Output column names, in file order.
pub const OUTPUT_COLUMNS: [&str; 15] = [
    "Freq Type",
    "RAT",
    "Cfg Band",
    "Debug Band",
    "Frequency",
    "Active RF Path",
    "Gain (dB)",
    "Reverse (dB)",
    "Input RL (dB)",
    "Output RL (dB)",
    "cfg_lna_gain_state",
    "cfg_active_port_1",
    "cfg_active_port_2",
    "ca_config",
    "debug-nplexer_bank",
];

/// One output row per surviving frequency point.
///
/// Metric fields are NaN when the underlying magnitude is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    pub freq_type: String,
    pub rat: String,
    pub cfg_band: String,
    pub debug_band: String,
    /// Frequency in MHz.
    pub frequency: f64,
    pub active_rf_path: String,
    pub gain_db: f64,
    pub reverse_db: f64,
    pub input_rl_db: f64,
    pub output_rl_db: f64,
    pub lna_gain_state: String,
    pub active_port_1: String,
    pub active_port_2: String,
    pub ca_config: String,
    pub nplexer_bank: String,
}

impl OutputRow {
    /// Metric values in column order, with NaN mapped to `None`.
    pub fn metrics(&self) -> [Option<f64>; 4] {
        [
            self.gain_db,
            self.reverse_db,
            self.input_rl_db,
            self.output_rl_db,
        ]
        .map(|value| if value.is_nan() { None } else { Some(value) })
    }
}
