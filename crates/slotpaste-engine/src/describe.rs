//! Human-readable view of a schedule: one row per run of consecutive slots,
//! with wall-clock times in a chosen time zone.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use slotpaste_codec::{compress_intervals, decompress, AvailabilityMap, CodecError, CompressedSchedule};

use crate::error::{EngineError, Result};

/// One run of consecutive slots.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSummary {
    pub start: DateTime<Tz>,
    /// End of the last slot in the run (exclusive).
    pub end: DateTime<Tz>,
    pub slots: usize,
    pub available: usize,
    /// `#` for an available slot, `.` for an unavailable one.
    pub pattern: String,
}

impl fmt::Display for IntervalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = if self.start.date_naive() == self.end.date_naive() {
            self.end.format("%H:%M").to_string()
        } else {
            self.end.format("%a %Y-%m-%d %H:%M").to_string()
        };
        write!(
            f,
            "{}-{}  {}/{} available  {}",
            self.start.format("%a %Y-%m-%d %H:%M"),
            end,
            self.available,
            self.slots,
            self.pattern
        )
    }
}

/// Describe a compressed schedule of either layout. Timestamps are Unix seconds.
pub fn describe(schedule: &CompressedSchedule, tz: Tz) -> Result<Vec<IntervalSummary>> {
    let map = decompress(schedule).map_err(CodecError::from)?;
    describe_map(&map, schedule.step(), tz)
}

pub fn describe_map(map: &AvailabilityMap, step: i64, tz: Tz) -> Result<Vec<IntervalSummary>> {
    let runs = compress_intervals(map, step).map_err(CodecError::from)?;

    runs.intervals
        .iter()
        .map(|run| {
            let slots = run.slot_count();
            let end = (slots as i64)
                .checked_mul(step)
                .and_then(|span| run.offset.checked_add(span))
                .ok_or(EngineError::TimestampOutOfRange(run.offset))?;
            Ok(IntervalSummary {
                start: to_local(run.offset, tz)?,
                end: to_local(end, tz)?,
                slots,
                available: run.bits.chars().filter(|&c| c == '1').count(),
                pattern: run
                    .bits
                    .chars()
                    .map(|c| if c == '1' { '#' } else { '.' })
                    .collect(),
            })
        })
        .collect()
}

fn to_local(timestamp: i64, tz: Tz) -> Result<DateTime<Tz>> {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|utc| utc.with_timezone(&tz))
        .ok_or(EngineError::TimestampOutOfRange(timestamp))
}
