//! Error types for slotpaste-engine operations.

use slotpaste_codec::CodecError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("No signed-in subject: sign in to read or write a schedule")]
    NoSubject,

    #[error("Host state unavailable: {0}")]
    Precondition(String),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Timestamp {0} is outside the representable date range")]
    TimestampOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, EngineError>;
