//! SnP ingestion.
//!
//! - **touchstone**: reads `.s1p`..`.s12p` files into unit-normalized network points
//! - **filename**: derives port, band, CA and gain-state metadata from filenames
//! - **discovery**: finds and classifies SnP files on disk

pub mod discovery;
pub mod error;
pub mod filename;
pub mod touchstone;

pub use discovery::{expand_inputs, is_snp_path, list_snp_files, snp_port_count};
pub use error::{IngestError, Result};
pub use filename::extract_metadata;
pub use touchstone::{
    DataFormat, FrequencyUnit, OptionLine, ParameterType, Touchstone, TouchstoneHeader,
    parse_touchstone, read_touchstone,
};
