//! Property-based round-trip tests.
//!
//! For any availability map, `decode(encode(map)) == map` under both layouts,
//! both at the structure level and through the schedule text.

use proptest::prelude::*;
use slotpaste_codec::Strategy as Layout;
use slotpaste_codec::{
    compress_deltas, compress_intervals, decode, decompress, encode, AvailabilityMap, CodecConfig,
    CompressedSchedule,
};

const STEP: i64 = 900;

/// Keys on the 15-minute grid, clustered so that runs actually form.
fn arb_grid_map() -> impl Strategy<Value = AvailabilityMap> {
    prop::collection::btree_map(-2_000i64..2_000, any::<bool>(), 0..300).prop_map(|units| {
        units
            .into_iter()
            .map(|(unit, available)| (unit * STEP, available))
            .collect::<AvailabilityMap>()
    })
}

/// Arbitrary keys, not necessarily on the grid.
fn arb_any_map() -> impl Strategy<Value = AvailabilityMap> {
    prop::collection::btree_map(
        -1_000_000_000_000i64..1_000_000_000_000,
        any::<bool>(),
        0..100,
    )
    .prop_map(|m| m.into_iter().collect::<AvailabilityMap>())
}

fn unlimited(strategy: Layout) -> CodecConfig {
    CodecConfig {
        strategy,
        max_chars: None,
        ..CodecConfig::default()
    }
}

proptest! {
    #[test]
    fn interval_roundtrip(m in arb_grid_map()) {
        let schedule = compress_intervals(&m, STEP).unwrap();
        prop_assert_eq!(decompress(&CompressedSchedule::IntervalRun(schedule)).unwrap(), m);
    }

    #[test]
    fn interval_roundtrip_off_grid(m in arb_any_map()) {
        let schedule = compress_intervals(&m, STEP).unwrap();
        prop_assert_eq!(decompress(&CompressedSchedule::from(schedule)).unwrap(), m);
    }

    #[test]
    fn delta_roundtrip(m in arb_grid_map()) {
        let schedule = compress_deltas(&m, STEP).unwrap();
        prop_assert!(schedule.available_units.iter().chain(&schedule.unavailable_units).all(|&u| u >= 0));
        prop_assert_eq!(decompress(&CompressedSchedule::from(schedule)).unwrap(), m);
    }

    #[test]
    fn text_roundtrip_both_layouts(m in arb_grid_map()) {
        for strategy in [Layout::IntervalRun, Layout::DeltaList] {
            let text = encode(&m, &unlimited(strategy)).unwrap();
            prop_assert_eq!(&decode(&text).unwrap(), &m);
        }
    }

    /// Runs are maximal and cover every key exactly once.
    #[test]
    fn runs_are_maximal(m in arb_grid_map()) {
        let schedule = compress_intervals(&m, STEP).unwrap();
        let covered: usize = schedule.intervals.iter().map(|i| i.slot_count()).sum();
        prop_assert_eq!(covered, m.len());
        for pair in schedule.intervals.windows(2) {
            let end = pair[0].offset + (pair[0].slot_count() as i64 - 1) * STEP;
            prop_assert!(pair[1].offset > end + STEP);
        }
    }

    /// Arbitrary pasted text yields an error, never a panic.
    #[test]
    fn decode_never_panics(s in "\\PC{0,64}") {
        let _ = decode(&s);
    }
}
