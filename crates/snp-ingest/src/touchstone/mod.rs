//! Touchstone (SnP) reading.

mod options;
mod reader;

pub use options::{DataFormat, FrequencyUnit, OptionLine, ParameterType};
pub use reader::{Touchstone, TouchstoneHeader, parse_touchstone, read_touchstone};
