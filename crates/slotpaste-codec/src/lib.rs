//! # slotpaste-codec
//!
//! Compact, reversible text encoding for a single person's slot availability.
//!
//! A schedule is a sparse boolean function over fixed-width time slots
//! (fifteen minutes by default). The codec turns it into a short JSON string a
//! person can copy into another schedule, edit by hand, and paste back, and
//! decodes that string to exactly the same mapping.
//!
//! ## Quick start
//!
//! ```rust
//! use slotpaste_codec::{decode, encode, AvailabilityMap, CodecConfig};
//!
//! let map: AvailabilityMap = [(0, true), (900, true), (1800, false), (3600, true)]
//!     .into_iter()
//!     .collect();
//!
//! let text = encode(&map, &CodecConfig::default()).unwrap();
//! assert_eq!(
//!     text,
//!     r#"{"step":900,"intervals":[{"offset":0,"avail":"110"},{"offset":3600,"avail":"1"}]}"#
//! );
//!
//! assert_eq!(decode(&text).unwrap(), map);
//! ```
//!
//! ## Modules
//!
//! - [`types`]: `AvailabilityMap`, `CompressedSchedule` and its two layouts
//! - [`encoder`]: map → compressed schedule (interval-run or delta-list)
//! - [`decoder`]: compressed schedule → map, with validation
//! - [`interchange`]: schedule text with the presentation size ceiling
//! - [`config`]: step, layout and ceiling settings
//! - [`error`]: Error types

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod interchange;
pub mod types;

pub use config::{CodecConfig, DEFAULT_MAX_CHARS};
pub use decoder::decompress;
pub use encoder::{compress, compress_deltas, compress_intervals};
pub use error::{CodecError, DecodeError, EncodeError, SizeLimitError};
pub use interchange::{check_size, decode, encode, parse, to_text, to_text_within};
pub use types::{
    AvailabilityMap, CompressedSchedule, DeltaSchedule, Interval, IntervalSchedule, Strategy,
    Timestamp, DEFAULT_STEP,
};
