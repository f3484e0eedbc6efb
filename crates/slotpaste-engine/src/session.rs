//! One copy/paste edit session: read → encode → present → parse → decode → write.
//!
//! Every invocation ends in exactly one [`Outcome`]. The host is only mutated
//! on [`Outcome::Applied`], and only after the edited text has decoded in full.

use slotpaste_codec::{CodecError, SizeLimitError};

use crate::adapter::{read_current, write_current, WriteSummary};
use crate::config::SessionConfig;
use crate::error::{EngineError, Result};
use crate::host::{Host, SubjectId};

/// The presentation surface: shows `prefill` for editing and returns the
/// edited text, or `None` if the person cancelled. Empty text also cancels.
pub trait Editor {
    fn present(&mut self, prompt: &str, prefill: &str) -> Option<String>;
}

impl<F> Editor for F
where
    F: FnMut(&str, &str) -> Option<String>,
{
    fn present(&mut self, prompt: &str, prefill: &str) -> Option<String> {
        self(prompt, prefill)
    }
}

/// Result of a single session.
#[derive(Debug)]
pub enum Outcome {
    /// Nobody is signed in; nothing was shown or changed.
    NoSubject,
    /// The schedule text would not fit the presentation surface.
    SizeExceeded(SizeLimitError),
    /// The person declined to provide edited text.
    Cancelled,
    /// The schedule could not be encoded, or the edited text did not decode.
    Rejected(CodecError),
    /// The edited schedule was written to the host.
    Applied(WriteSummary),
}

impl Outcome {
    /// Exit-code equivalent: `1` applied, `0` cancelled, `-1` rejected,
    /// `-2` when the session could not start.
    pub fn code(&self) -> i32 {
        match self {
            Outcome::Applied(_) => 1,
            Outcome::Cancelled => 0,
            Outcome::Rejected(_) => -1,
            Outcome::NoSubject | Outcome::SizeExceeded(_) => -2,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    /// Human-readable message for the person at the keyboard.
    pub fn message(&self) -> String {
        match self {
            Outcome::NoSubject => "To use this tool, you must be signed in.".to_string(),
            Outcome::SizeExceeded(e) => format!(
                "Unfortunately, your schedule is too large to work with this tool ({} characters, limit {}).",
                e.len, e.limit
            ),
            Outcome::Cancelled => "Cancelled; no changes made.".to_string(),
            Outcome::Rejected(e) => format!("Could not use that schedule: {}. No changes made.", e),
            Outcome::Applied(s) => format!(
                "Schedule saved: {} slot(s) marked available, {} marked unavailable, {} unrecognised.",
                s.added, s.removed, s.ignored
            ),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Outcome::NoSubject => "no_subject",
            Outcome::SizeExceeded(_) => "size_exceeded",
            Outcome::Cancelled => "cancelled",
            Outcome::Rejected(_) => "rejected",
            Outcome::Applied(_) => "applied",
        }
    }
}

/// Run one interactive session against `host`.
pub fn run_session<H, E>(host: &mut H, editor: &mut E, config: &SessionConfig) -> Outcome
where
    H: Host + ?Sized,
    E: Editor + ?Sized,
{
    let outcome = drive(host, editor, config);
    tracing::info!(outcome = outcome.label(), code = outcome.code(), "edit session finished");
    outcome
}

fn drive<H, E>(host: &mut H, editor: &mut E, config: &SessionConfig) -> Outcome
where
    H: Host + ?Sized,
    E: Editor + ?Sized,
{
    let Some(subject) = host.current_subject().filter(SubjectId::is_valid) else {
        return Outcome::NoSubject;
    };

    let current = read_current(&*host, Some(&subject));
    let before = match slotpaste_codec::encode(&current, &config.codec) {
        Ok(text) => text,
        Err(CodecError::SizeLimit(e)) => return Outcome::SizeExceeded(e),
        Err(e) => return Outcome::Rejected(e),
    };

    let after = match editor.present(&config.prompt, &before) {
        Some(text) if !text.is_empty() => text,
        _ => return Outcome::Cancelled,
    };

    let edited = match slotpaste_codec::decode(&after) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!(error = %e, "edited schedule rejected");
            return Outcome::Rejected(e);
        }
    };

    match write_current(host, Some(&subject), &edited) {
        Ok(summary) => Outcome::Applied(summary),
        Err(_) => Outcome::NoSubject,
    }
}

/// Non-interactive half of a session: the signed-in subject's schedule text.
pub fn export_text<H: Host + ?Sized>(host: &H, config: &SessionConfig) -> Result<String> {
    let subject = host
        .current_subject()
        .filter(SubjectId::is_valid)
        .ok_or(EngineError::NoSubject)?;
    let current = read_current(host, Some(&subject));
    Ok(slotpaste_codec::encode(&current, &config.codec)?)
}

/// Non-interactive other half: decode `text` and apply it to the signed-in subject.
///
/// Nothing is written unless the whole text decodes.
pub fn import_text<H: Host + ?Sized>(host: &mut H, text: &str) -> Result<WriteSummary> {
    let subject = host
        .current_subject()
        .filter(SubjectId::is_valid)
        .ok_or(EngineError::NoSubject)?;
    let edited = slotpaste_codec::decode(text)?;
    write_current(host, Some(&subject), &edited)
}
