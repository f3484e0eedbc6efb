use slotpaste_codec::decoder::{decompress_deltas, decompress_intervals};
use slotpaste_codec::{
    decompress, AvailabilityMap, CompressedSchedule, DecodeError, DeltaSchedule, Interval,
    IntervalSchedule,
};

fn map(entries: &[(i64, bool)]) -> AvailabilityMap {
    entries.iter().copied().collect()
}

fn runs(step: i64, intervals: &[(i64, &str)]) -> IntervalSchedule {
    IntervalSchedule {
        step,
        intervals: intervals
            .iter()
            .map(|&(offset, bits)| Interval {
                offset,
                bits: bits.to_string(),
            })
            .collect(),
    }
}

fn deltas(step: i64, base: i64, available: &[i64], unavailable: &[i64]) -> DeltaSchedule {
    DeltaSchedule {
        step,
        base_offset_units: base,
        available_units: available.to_vec(),
        unavailable_units: unavailable.to_vec(),
    }
}

// ============================================================================
// Interval-run
// ============================================================================

#[test]
fn decode_two_runs() {
    let decoded = decompress_intervals(&runs(900, &[(0, "110"), (3600, "1")])).unwrap();
    assert_eq!(
        decoded,
        map(&[(0, true), (900, true), (1800, false), (3600, true)])
    );
}

#[test]
fn decode_no_intervals() {
    let decoded = decompress_intervals(&runs(900, &[])).unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn decode_empty_bits_contributes_nothing() {
    let decoded = decompress_intervals(&runs(900, &[(0, ""), (900, "1")])).unwrap();
    assert_eq!(decoded, map(&[(900, true)]));
}

#[test]
fn decode_uses_schedule_step() {
    let decoded = decompress_intervals(&runs(1800, &[(0, "101")])).unwrap();
    assert_eq!(decoded, map(&[(0, true), (1800, false), (3600, true)]));
}

#[test]
fn decode_overlapping_intervals_later_wins() {
    let decoded = decompress_intervals(&runs(900, &[(0, "11"), (900, "0")])).unwrap();
    assert_eq!(decoded, map(&[(0, true), (900, false)]));
}

#[test]
fn decode_rejects_non_binary_character() {
    let err = decompress_intervals(&runs(900, &[(0, "1"), (3600, "102")])).unwrap_err();
    match err {
        DecodeError::InvalidBit {
            interval,
            position,
            found,
        } => {
            assert_eq!(interval, 1);
            assert_eq!(position, 2);
            assert_eq!(found, '2');
        }
        other => panic!("expected InvalidBit, got {other:?}"),
    }
}

#[test]
fn decode_rejects_non_ascii_bit() {
    let err = decompress_intervals(&runs(900, &[(0, "1é")])).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidBit {
            position: 1,
            found: 'é',
            ..
        }
    ));
}

#[test]
fn decode_rejects_zero_step() {
    let err = decompress_intervals(&runs(0, &[(0, "1")])).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidStep(0)));
}

#[test]
fn decode_rejects_timestamp_overflow() {
    let err = decompress_intervals(&runs(900, &[(i64::MAX - 100, "11")])).unwrap_err();
    assert!(matches!(err, DecodeError::Overflow { index: 1, .. }));
}

// ============================================================================
// Delta-list
// ============================================================================

#[test]
fn decode_delta_lists() {
    let decoded = decompress_deltas(&deltas(900, 0, &[0, 1, 4], &[2])).unwrap();
    assert_eq!(
        decoded,
        map(&[(0, true), (900, true), (1800, false), (3600, true)])
    );
}

#[test]
fn decode_delta_applies_base() {
    let decoded = decompress_deltas(&deltas(900, 10, &[0], &[1])).unwrap();
    assert_eq!(decoded, map(&[(9000, true), (9900, false)]));
}

#[test]
fn decode_delta_unit_in_both_lists_is_unavailable() {
    let decoded = decompress_deltas(&deltas(900, 0, &[3], &[3])).unwrap();
    assert_eq!(decoded, map(&[(2700, false)]));
}

#[test]
fn decode_delta_rejects_negative_step() {
    let err = decompress_deltas(&deltas(-1, 0, &[0], &[])).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidStep(-1)));
}

#[test]
fn decode_delta_rejects_overflow() {
    let err = decompress_deltas(&deltas(900, i64::MAX / 900, &[1], &[])).unwrap_err();
    assert!(matches!(err, DecodeError::Overflow { .. }));
}

#[test]
fn decompress_dispatches_on_layout() {
    let from_runs = decompress(&CompressedSchedule::IntervalRun(runs(900, &[(0, "10")]))).unwrap();
    let from_deltas = decompress(&CompressedSchedule::DeltaList(deltas(900, 0, &[0], &[1]))).unwrap();
    assert_eq!(from_runs, from_deltas);
}
