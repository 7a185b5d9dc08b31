//! Active RF path codes.
//!
//! The path label is `S<in><out>` where each side is a two-digit code taken
//! from a fixed port table, e.g. ANT1 → RXOUT1 is `S0706`.

/// Input port used when the filename does not name one.
pub const DEFAULT_PORT_IN: &str = "ANT1";
/// Output port used when the filename does not name one.
pub const DEFAULT_PORT_OUT: &str = "RXOUT1";

const INPUT_CODES: [(&str, &str); 4] = [
    ("ANT1", "07"),
    ("ANT2", "08"),
    ("ANT3", "09"),
    ("ANT4", "10"),
];

const OUTPUT_CODES: [(&str, &str); 4] = [
    ("RXOUT1", "06"),
    ("RXOUT2", "07"),
    ("RXOUT3", "08"),
    ("RXOUT4", "09"),
];

fn lookup(table: &[(&str, &'static str)], label: &str, fallback: &'static str) -> &'static str {
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map_or(fallback, |(_, code)| code)
}

/// Code for an input port; unknown labels use the ANT1 code.
pub fn input_port_code(label: &str) -> &'static str {
    lookup(&INPUT_CODES, label, "07")
}

/// Code for an output port; unknown labels use the RXOUT1 code.
pub fn output_port_code(label: &str) -> &'static str {
    lookup(&OUTPUT_CODES, label, "06")
}

/// `S<in><out>` for a port pair, with missing ports taking their defaults.
pub fn active_rf_path(port_in: Option<&str>, port_out: Option<&str>) -> String {
    format!(
        "S{}{}",
        input_port_code(port_in.unwrap_or(DEFAULT_PORT_IN)),
        output_port_code(port_out.unwrap_or(DEFAULT_PORT_OUT))
    )
}
