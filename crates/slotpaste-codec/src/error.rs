//! Error types for schedule compression, decoding and text interchange.

use thiserror::Error;

/// Errors that can occur anywhere in the codec pipeline.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The availability map could not be expressed in the requested strategy.
    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// The schedule text was not valid JSON or did not describe a schedule.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("JSON serialization error: {0}")]
    Serialize(serde_json::Error),

    /// The serialized schedule does not fit the presentation budget.
    #[error(transparent)]
    SizeLimit(#[from] SizeLimitError),
}

/// Failure while compressing a normalized availability map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("step must be a positive number of seconds, got {0}")]
    InvalidStep(i64),

    /// Delta-list units are whole multiples of the step; an off-grid key
    /// would be lost.
    #[error("timestamp {timestamp} is not a multiple of step {step}")]
    Misaligned { timestamp: i64, step: i64 },
}

/// Failure while parsing or expanding a compressed schedule.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Not valid JSON, or a field is missing or has the wrong type.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("schedule must be a JSON object")]
    NotAnObject,

    #[error("unrecognised schedule: expected an `intervals` list or `baseOffsetUnits`")]
    UnknownShape,

    #[error("ambiguous schedule: `intervals` cannot be combined with delta-list fields")]
    AmbiguousShape,

    #[error("step must be a positive number of seconds, got {0}")]
    InvalidStep(i64),

    /// 0-based interval index and character position of the offending bit.
    #[error("interval {interval}: invalid character {found:?} at position {position}, expected '0' or '1'")]
    InvalidBit {
        interval: usize,
        position: usize,
        found: char,
    },

    #[error("timestamp out of range (offset {offset}, index {index}, step {step})")]
    Overflow { offset: i64, index: i64, step: i64 },
}

/// The serialized schedule is longer than the presentation surface accepts.
///
/// Truncating would corrupt the schedule, so nothing is presented instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("schedule text is {len} characters, over the {limit}-character limit")]
pub struct SizeLimitError {
    pub len: usize,
    pub limit: usize,
}

/// Convenience alias used throughout slotpaste-codec.
pub type Result<T> = std::result::Result<T, CodecError>;
