//! Decibel metrics derived from S-parameter magnitudes.

use serde::Serialize;
use snp_model::FrequencyRow;

/// `20·log10(magnitude)`, or NaN for a zero magnitude.
pub fn db20(magnitude: f64) -> f64 {
    if magnitude == 0.0 {
        return f64::NAN;
    }
    20.0 * magnitude.log10()
}

/// Return loss, `-20·log10(magnitude)`, or NaN for a zero magnitude.
pub fn return_loss_db(magnitude: f64) -> f64 {
    -db20(magnitude)
}

/// The four metrics written for each frequency point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowMetrics {
    /// From |S21|.
    pub gain_db: f64,
    /// From |S12|.
    pub reverse_db: f64,
    /// From |S11|.
    pub input_rl_db: f64,
    /// From |S22|.
    pub output_rl_db: f64,
}

impl RowMetrics {
    pub fn from_row(row: &FrequencyRow) -> Self {
        let [s11, s21, s12, s22] = row.magnitudes();
        Self {
            gain_db: db20(s21),
            reverse_db: db20(s12),
            input_rl_db: return_loss_db(s11),
            output_rl_db: return_loss_db(s22),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_magnitude_is_zero_db() {
        assert_eq!(db20(1.0), 0.0);
        assert_eq!(return_loss_db(1.0), 0.0);
    }

    #[test]
    fn zero_magnitude_is_nan() {
        assert!(db20(0.0).is_nan());
        assert!(return_loss_db(0.0).is_nan());
    }

    #[test]
    fn tenth_is_minus_twenty() {
        assert!((db20(0.1) + 20.0).abs() < 1e-12);
        assert!((return_loss_db(0.1) - 20.0).abs() < 1e-12);
    }
}
