//! Registry-wide invariants for the band table.

use proptest::prelude::{prop_assert, proptest};
use snp_model::LinkDirection;
use snp_standards::{Duplex, FrequencyRange, standard_bands};

#[test]
fn every_range_is_ordered() {
    for band in standard_bands().all() {
        assert!(
            band.downlink.min_mhz <= band.downlink.max_mhz,
            "{} downlink",
            band.name
        );
        if let Some(uplink) = band.uplink {
            assert!(uplink.min_mhz <= uplink.max_mhz, "{} uplink", band.name);
        }
    }
}

#[test]
fn tdd_bands_share_one_range() {
    for band in standard_bands().all().filter(|b| b.duplex == Duplex::Tdd) {
        assert_eq!(band.uplink, Some(band.downlink), "{}", band.name);
        assert_eq!(
            band.range(LinkDirection::Rx),
            band.range(LinkDirection::Tx),
            "{}",
            band.name
        );
    }
}

#[test]
fn gsm_aliases_match_reference_values() {
    let cases = [
        ("GSM850", (824.0, 849.0), (869.0, 894.0)),
        ("GSM900", (890.0, 915.0), (935.0, 960.0)),
        ("DCS", (1710.0, 1785.0), (1805.0, 1880.0)),
        ("PCS", (1850.0, 1910.0), (1930.0, 1990.0)),
    ];
    for (name, uplink, downlink) in cases {
        let band = standard_bands().get(name).expect("band registered");
        assert_eq!(band.uplink, Some(FrequencyRange::new(uplink.0, uplink.1)));
        assert_eq!(band.downlink, FrequencyRange::new(downlink.0, downlink.1));
    }
}

#[test]
fn b7_rx_and_tx_differ() {
    let table = standard_bands();
    assert_eq!(
        table.range_for("B7", LinkDirection::Rx),
        Some(FrequencyRange::new(2620.0, 2690.0))
    );
    assert_eq!(
        table.range_for("B7", LinkDirection::Tx),
        Some(FrequencyRange::new(2500.0, 2570.0))
    );
}

proptest! {
    #[test]
    fn range_contains_is_inclusive(min in 0.0f64..5000.0, width in 0.0f64..500.0) {
        let range = FrequencyRange::new(min, min + width);
        prop_assert!(range.contains(range.min_mhz));
        prop_assert!(range.contains(range.max_mhz));
        prop_assert!(!range.contains(range.max_mhz + 1.0));
        prop_assert!(range.width() >= 0.0);
    }
}
