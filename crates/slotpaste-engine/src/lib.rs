//! # slotpaste-engine
//!
//! Everything around the codec that turns it into a copy/paste tool: the
//! host contract, the adapter between host state and availability maps, the
//! edit session with its outcomes, and a human-readable schedule view.
//!
//! ## Modules
//!
//! - [`host`]: `Host` trait, `SubjectId`, and the snapshot-backed `MemoryHost`
//! - [`adapter`]: `read_current` / `write_current`
//! - [`session`]: `run_session`, `Outcome`, `Editor`, plus `export_text` / `import_text`
//! - [`describe`]: schedule rows with local wall-clock times
//! - [`config`]: `SessionConfig`
//! - [`error`]: Error types

pub mod adapter;
pub mod config;
pub mod describe;
pub mod error;
pub mod host;
pub mod session;

pub use adapter::{read_current, write_current, WriteSummary};
pub use config::SessionConfig;
pub use describe::{describe, describe_map, IntervalSummary};
pub use error::EngineError;
pub use host::{Host, MemoryHost, SubjectId};
pub use session::{export_text, import_text, run_session, Editor, Outcome};
