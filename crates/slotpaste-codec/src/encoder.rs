//! Compression: normalized availability map → compressed schedule.
//!
//! Two layouts are supported:
//!
//! - **Interval-run**: keys are sorted and split into maximal runs spaced
//!   exactly one step apart. Each run becomes one offset plus one `0`/`1`
//!   character per slot. Daily blocks collapse to a single entry, so this is
//!   the denser layout for real schedules.
//! - **Delta-list**: every key becomes a small unit index relative to the
//!   smallest key, listed under available or unavailable.
//!
//! # Example
//! ```
//! use slotpaste_codec::{compress_intervals, AvailabilityMap};
//! let map: AvailabilityMap = [(0, true), (900, true), (1800, false), (3600, true)]
//!     .into_iter()
//!     .collect();
//! let schedule = compress_intervals(&map, 900).unwrap();
//! assert_eq!(schedule.intervals.len(), 2);
//! assert_eq!(schedule.intervals[0].bits, "110");
//! ```

use crate::error::EncodeError;
use crate::types::{
    AvailabilityMap, CompressedSchedule, DeltaSchedule, Interval, IntervalSchedule, Strategy,
    Timestamp,
};

/// Compress `map` with the chosen layout.
pub fn compress(
    map: &AvailabilityMap,
    step: i64,
    strategy: Strategy,
) -> Result<CompressedSchedule, EncodeError> {
    let schedule: CompressedSchedule = match strategy {
        Strategy::IntervalRun => compress_intervals(map, step)?.into(),
        Strategy::DeltaList => compress_deltas(map, step)?.into(),
    };
    tracing::debug!(
        keys = map.len(),
        step,
        strategy = %strategy,
        "compressed availability map"
    );
    Ok(schedule)
}

/// Interval-run compression. Total for any map and positive step.
pub fn compress_intervals(
    map: &AvailabilityMap,
    step: i64,
) -> Result<IntervalSchedule, EncodeError> {
    check_step(step)?;

    let mut intervals: Vec<Interval> = Vec::new();
    let mut prev: Option<Timestamp> = None;
    for (time, available) in map.iter() {
        // A key continues the current run only if it sits exactly one step
        // after the previous key.
        let continues = prev.and_then(|p| p.checked_add(step)) == Some(time);
        if !continues {
            intervals.push(Interval {
                offset: time,
                bits: String::new(),
            });
        }
        if let Some(run) = intervals.last_mut() {
            run.bits.push(if available { '1' } else { '0' });
        }
        prev = Some(time);
    }

    Ok(IntervalSchedule { step, intervals })
}

/// Delta-list compression.
///
/// The base is the smallest key's unit (`0` for an empty map). Units are
/// listed in ascending timestamp order.
pub fn compress_deltas(map: &AvailabilityMap, step: i64) -> Result<DeltaSchedule, EncodeError> {
    check_step(step)?;

    let base_offset_units = map
        .first_timestamp()
        .map(|t| t.div_euclid(step))
        .unwrap_or(0);

    let mut available_units = Vec::new();
    let mut unavailable_units = Vec::new();
    for (time, available) in map.iter() {
        if time.rem_euclid(step) != 0 {
            return Err(EncodeError::Misaligned {
                timestamp: time,
                step,
            });
        }
        let unit = time.div_euclid(step) - base_offset_units;
        if available {
            available_units.push(unit);
        } else {
            unavailable_units.push(unit);
        }
    }

    Ok(DeltaSchedule {
        step,
        base_offset_units,
        available_units,
        unavailable_units,
    })
}

fn check_step(step: i64) -> Result<(), EncodeError> {
    if step <= 0 {
        return Err(EncodeError::InvalidStep(step));
    }
    Ok(())
}
