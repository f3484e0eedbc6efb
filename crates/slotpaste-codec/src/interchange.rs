//! Text interchange: the compact JSON a person copies, pastes and edits.
//!
//! Output is minified JSON with fields in a fixed order. Arrays are always
//! bracketed sequences. The presentation ceiling is checked on the finished
//! text, counted in characters, and an over-long schedule is refused rather
//! than truncated.

use crate::config::CodecConfig;
use crate::decoder::decompress;
use crate::encoder::compress;
use crate::error::{CodecError, DecodeError, Result, SizeLimitError};
use crate::types::{AvailabilityMap, CompressedSchedule};

/// Encode an availability map into schedule text, honouring `config.max_chars`.
pub fn encode(map: &AvailabilityMap, config: &CodecConfig) -> Result<String> {
    config.validate()?;
    let schedule = compress(map, config.step, config.strategy)?;
    to_text_within(&schedule, config.max_chars)
}

/// Parse schedule text and expand it into an availability map.
pub fn decode(text: &str) -> Result<AvailabilityMap> {
    let schedule = parse(text)?;
    Ok(decompress(&schedule)?)
}

/// Serialize a compressed schedule without any length check.
pub fn to_text(schedule: &CompressedSchedule) -> Result<String> {
    serde_json::to_string(schedule).map_err(CodecError::Serialize)
}

/// Serialize a compressed schedule, failing if it exceeds `max_chars`.
pub fn to_text_within(schedule: &CompressedSchedule, max_chars: Option<usize>) -> Result<String> {
    let text = to_text(schedule)?;
    check_size(&text, max_chars)?;
    Ok(text)
}

/// Succeeds when `text` is at most `max_chars` characters long.
pub fn check_size(text: &str, max_chars: Option<usize>) -> std::result::Result<(), SizeLimitError> {
    let Some(limit) = max_chars else {
        return Ok(());
    };
    let len = text.chars().count();
    if len > limit {
        tracing::debug!(len, limit, "schedule text over the size limit");
        return Err(SizeLimitError { len, limit });
    }
    Ok(())
}

/// Parse schedule text into a compressed schedule of either layout.
///
/// Leading and trailing whitespace from copy/paste is ignored.
pub fn parse(text: &str) -> std::result::Result<CompressedSchedule, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(text.trim())?;
    CompressedSchedule::from_value(value)
}
