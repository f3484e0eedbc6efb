//! Availability model adapter: host per-slot sets ⇄ normalized availability map.
//!
//! Reading re-keys the host's slot sets by slot start time. Writing applies a
//! map back onto the host, touching only slots the host recognises, then
//! triggers both refresh hooks.

use std::collections::HashMap;

use slotpaste_codec::{AvailabilityMap, Timestamp};

use crate::error::{EngineError, Result};
use crate::host::{Host, SubjectId};

/// What a successful write changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Slots the subject was newly marked available in.
    pub added: usize,
    /// Slots the subject was newly marked unavailable in.
    pub removed: usize,
    /// Recognised slots whose availability already matched.
    pub unchanged: usize,
    /// Keys the host has no slot for.
    pub ignored: usize,
}

impl WriteSummary {
    pub fn changed(&self) -> usize {
        self.added + self.removed
    }
}

/// Read the subject's availability for every slot the host recognises.
///
/// A slot time listed more than once reads from its first occurrence.
///
/// A missing or invalid subject yields an empty map: no opinion about anything.
pub fn read_current<H: Host + ?Sized>(host: &H, subject: Option<&SubjectId>) -> AvailabilityMap {
    let Some(subject) = subject.filter(|s| s.is_valid()) else {
        return AvailabilityMap::new();
    };

    // Reversed so that for a repeated slot time the first occurrence lands
    // last and wins, the same slot `write_current` targets.
    let map: AvailabilityMap = host
        .slot_times()
        .iter()
        .enumerate()
        .rev()
        .map(|(slot, &time)| (time, host.subjects_at(slot).contains(subject)))
        .collect();

    tracing::debug!(
        subject = %subject,
        slots = map.len(),
        available = map.available_count(),
        "read current availability"
    );
    map
}

/// Apply `map` to the subject's availability and refresh the host views.
///
/// Keys without a matching host slot are skipped, so a schedule copied from a
/// host with a different slot set applies wherever the two overlap.
pub fn write_current<H: Host + ?Sized>(
    host: &mut H,
    subject: Option<&SubjectId>,
    map: &AvailabilityMap,
) -> Result<WriteSummary> {
    let Some(subject) = subject.filter(|s| s.is_valid()) else {
        tracing::warn!("refusing to write availability without a signed-in subject");
        return Err(EngineError::NoSubject);
    };

    let index = slot_index(host.slot_times());
    let mut summary = WriteSummary::default();

    for (time, available) in map.iter() {
        let Some(&slot) = index.get(&time) else {
            summary.ignored += 1;
            continue;
        };
        let was_available = host.subjects_at(slot).contains(subject);
        match (available, was_available) {
            (true, false) => {
                host.add_subject(slot, subject);
                summary.added += 1;
            }
            (false, true) => {
                host.remove_subject(slot, subject);
                summary.removed += 1;
            }
            _ => summary.unchanged += 1,
        }
    }

    host.refresh_individual(subject);
    host.refresh_group();

    tracing::info!(
        subject = %subject,
        added = summary.added,
        removed = summary.removed,
        unchanged = summary.unchanged,
        ignored = summary.ignored,
        "wrote availability"
    );
    Ok(summary)
}

/// Slot start → position of its first occurrence in the host's slot list.
fn slot_index(times: &[Timestamp]) -> HashMap<Timestamp, usize> {
    let mut index = HashMap::with_capacity(times.len());
    for (slot, &time) in times.iter().enumerate() {
        index.entry(time).or_insert(slot);
    }
    index
}
