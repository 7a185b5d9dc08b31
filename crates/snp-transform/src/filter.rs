//! Network points to band-limited 2-port rows.

use snp_model::{FrequencyRow, LinkDirection, NetworkPoint};
use snp_standards::BandTable;

use crate::error::{Result, TransformError};

/// The 2-port view of every point.
///
/// Fails if the network does not have exactly two ports.
pub fn two_port_rows(points: &[NetworkPoint]) -> Result<Vec<FrequencyRow>> {
    points
        .iter()
        .map(|point| {
            point
                .as_two_port()
                .ok_or(TransformError::UnsupportedPortCount { ports: point.ports })
        })
        .collect()
}

/// Keep rows inside the band's range for `direction`, inclusive at both ends.
///
/// Rows pass through unchanged when the band is absent or not in `table`.
pub fn filter_by_band(
    rows: Vec<FrequencyRow>,
    band: Option<&str>,
    direction: LinkDirection,
    table: &BandTable,
) -> Vec<FrequencyRow> {
    let Some(band) = band else {
        return rows;
    };
    let Some(range) = table.range_for(band, direction) else {
        tracing::debug!(band, %direction, "band has no range, skipping frequency filter");
        return rows;
    };

    let before = rows.len();
    let kept: Vec<FrequencyRow> = rows
        .into_iter()
        .filter(|row| range.contains(row.frequency_mhz))
        .collect();
    tracing::debug!(band, %range, before, after = kept.len(), "applied band filter");
    kept
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use snp_standards::standard_bands;

    use super::*;

    fn row(frequency_mhz: f64) -> FrequencyRow {
        let one = Complex64::new(1.0, 0.0);
        FrequencyRow::new(frequency_mhz, one, one, one, one)
    }

    fn frequencies(rows: &[FrequencyRow]) -> Vec<f64> {
        rows.iter().map(|r| r.frequency_mhz).collect()
    }

    #[test]
    fn b1_rx_boundaries_are_inclusive() {
        let rows = [2109.9, 2110.0, 2140.0, 2170.0, 2170.1].map(row).to_vec();
        let kept = filter_by_band(rows, Some("B1"), LinkDirection::Rx, standard_bands());
        assert_eq!(frequencies(&kept), vec![2110.0, 2140.0, 2170.0]);
    }

    #[test]
    fn tx_direction_uses_uplink() {
        let rows = [1920.0, 2140.0].map(row).to_vec();
        let kept = filter_by_band(rows, Some("b1"), LinkDirection::Tx, standard_bands());
        assert_eq!(frequencies(&kept), vec![1920.0]);
    }

    #[test]
    fn unknown_or_missing_band_passes_through() {
        let rows = [100.0, 5000.0].map(row).to_vec();
        let kept = filter_by_band(rows.clone(), Some("B999"), LinkDirection::Rx, standard_bands());
        assert_eq!(kept, rows);
        let kept = filter_by_band(rows.clone(), None, LinkDirection::Rx, standard_bands());
        assert_eq!(kept, rows);
    }

    #[test]
    fn non_two_port_is_rejected() {
        let points = vec![NetworkPoint::new(1.0, 1, vec![Complex64::new(0.5, 0.0)])];
        assert_eq!(
            two_port_rows(&points),
            Err(TransformError::UnsupportedPortCount { ports: 1 })
        );
    }
}
