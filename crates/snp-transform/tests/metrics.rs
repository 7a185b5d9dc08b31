//! Metric properties over generated magnitudes.

use num_complex::Complex64;
use proptest::prelude::{prop_assert, proptest};
use snp_model::{FileMetadata, FrequencyRow};
use snp_transform::{RowMetrics, calculate_metrics, db20, return_loss_db};

fn polar_row(s21_mag: f64, phase_deg: f64) -> FrequencyRow {
    let s21 = Complex64::from_polar(s21_mag, phase_deg.to_radians());
    let small = Complex64::new(0.1, 0.0);
    FrequencyRow::new(2140.0, small, s21, small, small)
}

#[test]
fn unit_s21_is_zero_gain_and_zero_is_nan() {
    let metadata = FileMetadata::default();
    let rows = calculate_metrics(&[polar_row(1.0, 0.0), polar_row(0.0, 0.0)], &metadata, None);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].gain_db.abs() < 1e-12);
    assert!(rows[1].gain_db.is_nan());
    assert_eq!(rows[1].metrics()[0], None);
}

proptest! {
    #[test]
    fn db20_inverts_to_magnitude(magnitude in 1e-6f64..1e3) {
        let db = db20(magnitude);
        let back = 10f64.powf(db / 20.0);
        prop_assert!((back - magnitude).abs() <= magnitude * 1e-9);
        prop_assert!((return_loss_db(magnitude) + db).abs() < 1e-12);
    }

    #[test]
    fn gain_ignores_phase(magnitude in 1e-4f64..10.0, phase in -180.0f64..180.0) {
        let reference = RowMetrics::from_row(&polar_row(magnitude, 0.0));
        let rotated = RowMetrics::from_row(&polar_row(magnitude, phase));
        prop_assert!((reference.gain_db - rotated.gain_db).abs() < 1e-6);
    }

    #[test]
    fn db20_is_monotonic(a in 1e-6f64..1e3, b in 1e-6f64..1e3) {
        if a < b {
            prop_assert!(db20(a) <= db20(b));
        }
    }
}
