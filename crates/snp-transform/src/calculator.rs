//! Rows plus filename metadata to output records.

use snp_map::NotationMapper;
use snp_model::{
    ConversionOptions, FileMetadata, FrequencyRow, NetworkPoint, OutputRow, UNKNOWN,
};
use snp_standards::{BandTable, standard_bands};

use crate::error::Result;
use crate::filter::{filter_by_band, two_port_rows};
use crate::metrics::RowMetrics;
use crate::ports::{DEFAULT_PORT_IN, DEFAULT_PORT_OUT, active_rf_path};

/// Frequency type written to every row (in-band).
pub const FREQ_TYPE: &str = "IB";
/// Radio access technology written to every row.
pub const RAT: &str = "LTE";

/// Turns one file's network points into output rows.
#[derive(Debug, Clone, Copy)]
pub struct MetricCalculator<'a> {
    bands: &'a BandTable,
    mapper: Option<&'a NotationMapper>,
    options: ConversionOptions,
}

impl Default for MetricCalculator<'_> {
    fn default() -> Self {
        Self::new(standard_bands())
    }
}

impl<'a> MetricCalculator<'a> {
    pub fn new(bands: &'a BandTable) -> Self {
        Self {
            bands,
            mapper: None,
            options: ConversionOptions::default(),
        }
    }

    pub fn with_mapper(mut self, mapper: Option<&'a NotationMapper>) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    /// 2-port check, optional band filter, then metrics.
    pub fn process(&self, points: &[NetworkPoint], metadata: &FileMetadata) -> Result<Vec<OutputRow>> {
        let rows = two_port_rows(points)?;
        let rows = if self.options.filters_by_band() {
            filter_by_band(
                rows,
                metadata.band.as_deref(),
                self.options.direction,
                self.bands,
            )
        } else {
            rows
        };
        Ok(calculate_metrics(&rows, metadata, self.mapper))
    }
}

/// One output row per input row.
///
/// The N-plexer bank column is filled only when a loaded mapper is given.
pub fn calculate_metrics(
    rows: &[FrequencyRow],
    metadata: &FileMetadata,
    mapper: Option<&NotationMapper>,
) -> Vec<OutputRow> {
    let band = metadata.band.as_deref().unwrap_or(UNKNOWN);
    let port_in = metadata.port_in.as_deref().unwrap_or(DEFAULT_PORT_IN);
    let port_out = metadata.port_out.as_deref().unwrap_or(DEFAULT_PORT_OUT);
    let lna_state = metadata.lna_state.as_deref().unwrap_or(UNKNOWN);
    let path = active_rf_path(Some(port_in), Some(port_out));
    let ca_config = metadata.ca_config_or_band();
    let nplexer_bank = mapper
        .filter(|m| m.is_loaded())
        .map(|m| m.map(ca_config).to_string())
        .unwrap_or_default();

    rows.iter()
        .map(|row| {
            let metrics = RowMetrics::from_row(row);
            OutputRow {
                freq_type: FREQ_TYPE.to_string(),
                rat: RAT.to_string(),
                cfg_band: band.to_string(),
                debug_band: band.to_string(),
                frequency: row.frequency_mhz,
                active_rf_path: path.clone(),
                gain_db: metrics.gain_db,
                reverse_db: metrics.reverse_db,
                input_rl_db: metrics.input_rl_db,
                output_rl_db: metrics.output_rl_db,
                lna_gain_state: lna_state.to_string(),
                active_port_1: port_in.to_string(),
                active_port_2: port_out.to_string(),
                ca_config: ca_config.to_string(),
                nplexer_bank: nplexer_bank.clone(),
            }
        })
        .collect()
}
