//! Support code for the `snp-convert` binary.

pub mod history;
pub mod logging;
