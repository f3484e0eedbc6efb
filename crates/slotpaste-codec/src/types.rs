//! Data model shared by both compression strategies.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::DecodeError;

/// Start of a schedulable slot, in seconds.
pub type Timestamp = i64;

/// Canonical slot granularity: fifteen minutes.
pub const DEFAULT_STEP: i64 = 900;

/// Normalized availability: slot start → available.
///
/// A missing key means "no opinion", which is not the same as `false`.
/// Keys are kept ordered so that compression output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityMap(BTreeMap<Timestamp, bool>);

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the availability at `timestamp`, returning the previous value.
    pub fn insert(&mut self, timestamp: Timestamp, available: bool) -> Option<bool> {
        self.0.insert(timestamp, available)
    }

    pub fn get(&self, timestamp: Timestamp) -> Option<bool> {
        self.0.get(&timestamp).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys marked available.
    pub fn available_count(&self) -> usize {
        self.0.values().filter(|&&v| v).count()
    }

    /// Iterate `(timestamp, available)` pairs in ascending timestamp order.
    pub fn iter(&self) -> impl Iterator<Item = (Timestamp, bool)> + '_ {
        self.0.iter().map(|(&t, &v)| (t, v))
    }

    pub fn first_timestamp(&self) -> Option<Timestamp> {
        self.0.keys().next().copied()
    }
}

impl FromIterator<(Timestamp, bool)> for AvailabilityMap {
    fn from_iter<I: IntoIterator<Item = (Timestamp, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(Timestamp, bool)> for AvailabilityMap {
    fn extend<I: IntoIterator<Item = (Timestamp, bool)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for AvailabilityMap {
    type Item = (Timestamp, bool);
    type IntoIter = btree_map::IntoIter<Timestamp, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Which compression layout to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// One `{offset, avail}` entry per run of consecutive slots.
    #[default]
    IntervalRun,
    /// Slot indices relative to a base, split by availability.
    DeltaList,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::IntervalRun => "interval-run",
            Strategy::DeltaList => "delta-list",
        })
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interval-run" | "intervals" => Ok(Strategy::IntervalRun),
            "delta-list" | "deltas" => Ok(Strategy::DeltaList),
            other => Err(format!(
                "unknown strategy '{}': expected interval-run or delta-list",
                other
            )),
        }
    }
}

/// A run of slots spaced exactly one step apart.
///
/// Character `i` of `bits` is the availability at `offset + i * step`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interval {
    pub offset: Timestamp,
    /// Serialized as `avail` so text from existing copies of the tool still decodes.
    #[serde(rename = "avail", alias = "bits")]
    pub bits: String,
}

impl Interval {
    /// Number of slots covered by this run.
    pub fn slot_count(&self) -> usize {
        self.bits.chars().count()
    }
}

/// Interval-run layout: `{"step":900,"intervals":[{"offset":0,"avail":"110"}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntervalSchedule {
    pub step: i64,
    pub intervals: Vec<Interval>,
}

/// Delta-list layout. Unit `u` denotes timestamp `(u + base_offset_units) * step`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeltaSchedule {
    pub step: i64,
    pub base_offset_units: i64,
    #[serde(default)]
    pub available_units: Vec<i64>,
    #[serde(default)]
    pub unavailable_units: Vec<i64>,
}

/// A self-contained compressed schedule in either layout.
///
/// There is no version tag; the layout is recognised from its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CompressedSchedule {
    IntervalRun(IntervalSchedule),
    DeltaList(DeltaSchedule),
}

const DELTA_FIELDS: [&str; 3] = ["baseOffsetUnits", "availableUnits", "unavailableUnits"];

impl CompressedSchedule {
    pub fn step(&self) -> i64 {
        match self {
            CompressedSchedule::IntervalRun(s) => s.step,
            CompressedSchedule::DeltaList(s) => s.step,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            CompressedSchedule::IntervalRun(_) => Strategy::IntervalRun,
            CompressedSchedule::DeltaList(_) => Strategy::DeltaList,
        }
    }

    /// Classify a parsed JSON value by its fields and deserialize it.
    ///
    /// An object with `intervals` is an interval-run schedule; one with any of
    /// the delta-list fields is a delta-list schedule. Both at once is an error,
    /// as is any field neither layout defines. Field-level errors (missing
    /// `step`, a quoted number) come back from serde verbatim.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let strategy = {
            let obj = value.as_object().ok_or(DecodeError::NotAnObject)?;
            let intervals = obj.contains_key("intervals");
            let deltas = DELTA_FIELDS.iter().any(|f| obj.contains_key(*f));
            match (intervals, deltas) {
                (true, true) => return Err(DecodeError::AmbiguousShape),
                (true, false) => Strategy::IntervalRun,
                (false, true) => Strategy::DeltaList,
                (false, false) => return Err(DecodeError::UnknownShape),
            }
        };
        Ok(match strategy {
            Strategy::IntervalRun => CompressedSchedule::IntervalRun(serde_json::from_value(value)?),
            Strategy::DeltaList => CompressedSchedule::DeltaList(serde_json::from_value(value)?),
        })
    }
}

impl<'de> Deserialize<'de> for CompressedSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        CompressedSchedule::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<IntervalSchedule> for CompressedSchedule {
    fn from(s: IntervalSchedule) -> Self {
        CompressedSchedule::IntervalRun(s)
    }
}

impl From<DeltaSchedule> for CompressedSchedule {
    fn from(s: DeltaSchedule) -> Self {
        CompressedSchedule::DeltaList(s)
    }
}
