//! Codec settings: slot granularity, layout, and the presentation ceiling.

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::types::{Strategy, DEFAULT_STEP};

/// Longest schedule text a browser prompt will pre-fill.
pub const DEFAULT_MAX_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Slot granularity in seconds.
    pub step: i64,
    pub strategy: Strategy,
    /// Maximum serialized length in characters; `None` disables the ceiling.
    pub max_chars: Option<usize>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            strategy: Strategy::default(),
            max_chars: Some(DEFAULT_MAX_CHARS),
        }
    }
}

impl CodecConfig {
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.step <= 0 {
            return Err(EncodeError::InvalidStep(self.step));
        }
        Ok(())
    }
}
