//! Session settings.

use serde::{Deserialize, Serialize};
use slotpaste_codec::CodecConfig;

use crate::error::{EngineError, Result};

pub const DEFAULT_PROMPT: &str = "Here is the schedule, which may be copied, pasted, and edited. \
Cancel to discard changes, or confirm to save them.";

/// Everything an edit session needs besides the host and the editor.
///
/// Codec fields sit at the top level of the JSON form:
/// `{"step":900,"strategy":"interval-run","max_chars":2000}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(flatten)]
    pub codec: CodecConfig,
    /// Text shown above the pre-filled schedule.
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            codec: CodecConfig::default(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SessionConfig =
            serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.codec
            .validate()
            .map_err(|e| EngineError::Config(e.to_string()))
    }
}
