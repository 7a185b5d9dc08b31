//! S-parameter rows.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// One frequency point of a 2-port network, normalized to MHz and
/// real/imaginary form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// Frequency in MHz.
    pub frequency_mhz: f64,
    pub s11: Complex64,
    pub s21: Complex64,
    pub s12: Complex64,
    pub s22: Complex64,
}

impl FrequencyRow {
    pub fn new(
        frequency_mhz: f64,
        s11: Complex64,
        s21: Complex64,
        s12: Complex64,
        s22: Complex64,
    ) -> Self {
        Self {
            frequency_mhz,
            s11,
            s21,
            s12,
            s22,
        }
    }

    /// Magnitudes in the order S11, S21, S12, S22.
    pub fn magnitudes(&self) -> [f64; 4] {
        [
            self.s11.norm(),
            self.s21.norm(),
            self.s12.norm(),
            self.s22.norm(),
        ]
    }
}

/// One frequency point of an N-port network.
///
/// `values` holds the N×N matrix in row-major order (S11, S12, … SNN),
/// already converted to real/imaginary form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkPoint {
    /// Frequency in MHz.
    pub frequency_mhz: f64,
    pub ports: usize,
    pub values: Vec<Complex64>,
}

impl NetworkPoint {
    pub fn new(frequency_mhz: f64, ports: usize, values: Vec<Complex64>) -> Self {
        debug_assert_eq!(values.len(), ports * ports);
        Self {
            frequency_mhz,
            ports,
            values,
        }
    }

    /// Sij with 1-based port numbers, as written in S-parameter notation.
    pub fn s(&self, i: usize, j: usize) -> Option<Complex64> {
        if i == 0 || j == 0 || i > self.ports || j > self.ports {
            return None;
        }
        self.values.get((i - 1) * self.ports + (j - 1)).copied()
    }

    /// The 2-port view of this point, if it has exactly two ports.
    pub fn as_two_port(&self) -> Option<FrequencyRow> {
        if self.ports != 2 {
            return None;
        }
        Some(FrequencyRow::new(
            self.frequency_mhz,
            self.s(1, 1)?,
            self.s(2, 1)?,
            self.s(1, 2)?,
            self.s(2, 2)?,
        ))
    }
}
