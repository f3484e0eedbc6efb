//! Decompression: compressed schedule → normalized availability map.
//!
//! Every timestamp is computed with checked arithmetic and every bit character
//! is validated before the map is returned, so a caller either gets the whole
//! map or an error. There is no partially decoded result to apply by mistake.
//!
//! Hand-edited text can repeat a slot (overlapping intervals, or one unit in
//! both delta lists). Later entries win: intervals apply in order, and the
//! unavailable list applies after the available list.

use crate::error::DecodeError;
use crate::types::{AvailabilityMap, CompressedSchedule, DeltaSchedule, IntervalSchedule};

/// Expand a compressed schedule of either layout.
pub fn decompress(schedule: &CompressedSchedule) -> Result<AvailabilityMap, DecodeError> {
    let map = match schedule {
        CompressedSchedule::IntervalRun(s) => decompress_intervals(s)?,
        CompressedSchedule::DeltaList(s) => decompress_deltas(s)?,
    };
    tracing::debug!(
        keys = map.len(),
        available = map.available_count(),
        strategy = %schedule.strategy(),
        "decompressed schedule"
    );
    Ok(map)
}

pub fn decompress_intervals(schedule: &IntervalSchedule) -> Result<AvailabilityMap, DecodeError> {
    let step = check_step(schedule.step)?;
    let mut map = AvailabilityMap::new();

    for (interval_idx, interval) in schedule.intervals.iter().enumerate() {
        for (position, ch) in interval.bits.chars().enumerate() {
            let available = match ch {
                '0' => false,
                '1' => true,
                found => {
                    return Err(DecodeError::InvalidBit {
                        interval: interval_idx,
                        position,
                        found,
                    })
                }
            };
            let index = position as i64;
            let time = index
                .checked_mul(step)
                .and_then(|delta| interval.offset.checked_add(delta))
                .ok_or(DecodeError::Overflow {
                    offset: interval.offset,
                    index,
                    step,
                })?;
            map.insert(time, available);
        }
    }

    Ok(map)
}

pub fn decompress_deltas(schedule: &DeltaSchedule) -> Result<AvailabilityMap, DecodeError> {
    let step = check_step(schedule.step)?;
    let base = schedule.base_offset_units;
    let mut map = AvailabilityMap::new();

    let lists = [
        (&schedule.available_units, true),
        (&schedule.unavailable_units, false),
    ];
    for (units, available) in lists {
        for &unit in units {
            let time = unit
                .checked_add(base)
                .and_then(|u| u.checked_mul(step))
                .ok_or(DecodeError::Overflow {
                    offset: base,
                    index: unit,
                    step,
                })?;
            map.insert(time, available);
        }
    }

    Ok(map)
}

fn check_step(step: i64) -> Result<i64, DecodeError> {
    if step <= 0 {
        return Err(DecodeError::InvalidStep(step));
    }
    Ok(step)
}
