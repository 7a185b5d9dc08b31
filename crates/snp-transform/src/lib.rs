//! Metric calculation for 2-port SnP measurements.
//!
//! Takes the network points read from a file together with its filename
//! metadata and produces [`OutputRow`](snp_model::OutputRow)s:
//!
//! - **filter**: 2-port view and band-range filtering
//! - **metrics**: gain, reverse isolation and return loss in dB
//! - **ports**: active RF path codes
//! - **calculator**: placeholders, CA notation and N-plexer bank lookup

mod calculator;
mod error;
mod filter;
mod metrics;
mod ports;

pub use calculator::{FREQ_TYPE, MetricCalculator, RAT, calculate_metrics};
pub use error::{Result, TransformError};
pub use filter::{filter_by_band, two_port_rows};
pub use metrics::{RowMetrics, db20, return_loss_db};
pub use ports::{
    DEFAULT_PORT_IN, DEFAULT_PORT_OUT, active_rf_path, input_port_code, output_port_code,
};
