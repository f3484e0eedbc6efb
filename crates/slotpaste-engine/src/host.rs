//! The host collaborator: whatever owns the live per-slot availability.
//!
//! The engine never reaches for ambient state. A [`Host`] is handed in by the
//! caller, and [`MemoryHost`] is the concrete one used by the CLI and tests.

use std::fmt;

use serde::{Deserialize, Serialize};
use slotpaste_codec::Timestamp;

use crate::error::{EngineError, Result};

/// Opaque identifier for the person whose availability is read or written.
///
/// Hosts hand out numeric IDs or strings; both are kept as given so a
/// snapshot serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectId {
    Number(u64),
    Text(String),
}

impl SubjectId {
    /// `0` and blank strings are the host's "nobody signed in" values.
    pub fn is_valid(&self) -> bool {
        match self {
            SubjectId::Number(n) => *n != 0,
            SubjectId::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectId::Number(n) => write!(f, "{}", n),
            SubjectId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for SubjectId {
    fn from(n: u64) -> Self {
        SubjectId::Number(n)
    }
}

impl From<&str> for SubjectId {
    fn from(s: &str) -> Self {
        SubjectId::Text(s.to_string())
    }
}

/// Narrow contract the adapter needs from the host.
///
/// Slots are addressed by their position in [`Host::slot_times`].
pub trait Host {
    /// Recognised slot start times, in host order.
    fn slot_times(&self) -> &[Timestamp];

    /// Subjects currently marked available in the slot at `slot`.
    fn subjects_at(&self, slot: usize) -> &[SubjectId];

    fn add_subject(&mut self, slot: usize, subject: &SubjectId);

    fn remove_subject(&mut self, slot: usize, subject: &SubjectId);

    /// The signed-in subject, if any.
    fn current_subject(&self) -> Option<SubjectId>;

    /// Redraw the subject's own availability view.
    fn refresh_individual(&mut self, subject: &SubjectId);

    /// Redraw the aggregate view across all subjects.
    fn refresh_group(&mut self);
}

/// In-memory host backed by a JSON snapshot.
///
/// ```json
/// {"timeOfSlot":[0,900,1800],"availableAtSlot":[[7],[],[7,9]],"userId":7}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryHost {
    pub time_of_slot: Vec<Timestamp>,
    pub available_at_slot: Vec<Vec<SubjectId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<SubjectId>,
    #[serde(skip)]
    individual_refreshes: usize,
    #[serde(skip)]
    group_refreshes: usize,
}

impl MemoryHost {
    /// A host offering `slots`, with nobody available and nobody signed in.
    pub fn new(slots: Vec<Timestamp>) -> Self {
        let available_at_slot = vec![Vec::new(); slots.len()];
        Self {
            time_of_slot: slots,
            available_at_slot,
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<SubjectId>) -> Self {
        self.user_id = Some(user.into());
        self
    }

    /// Load and validate a snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        let host: MemoryHost = serde_json::from_str(json)
            .map_err(|e| EngineError::Precondition(format!("invalid host snapshot: {}", e)))?;
        host.validate()?;
        Ok(host)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EngineError::Precondition(format!("cannot serialize host snapshot: {}", e)))
    }

    /// Every slot needs exactly one availability list.
    pub fn validate(&self) -> Result<()> {
        if self.time_of_slot.len() != self.available_at_slot.len() {
            return Err(EngineError::Precondition(format!(
                "{} slot times but {} availability lists",
                self.time_of_slot.len(),
                self.available_at_slot.len()
            )));
        }
        Ok(())
    }

    pub fn individual_refreshes(&self) -> usize {
        self.individual_refreshes
    }

    pub fn group_refreshes(&self) -> usize {
        self.group_refreshes
    }
}

impl Host for MemoryHost {
    fn slot_times(&self) -> &[Timestamp] {
        &self.time_of_slot
    }

    fn subjects_at(&self, slot: usize) -> &[SubjectId] {
        self.available_at_slot
            .get(slot)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn add_subject(&mut self, slot: usize, subject: &SubjectId) {
        if let Some(subjects) = self.available_at_slot.get_mut(slot) {
            if !subjects.contains(subject) {
                subjects.push(subject.clone());
            }
        }
    }

    fn remove_subject(&mut self, slot: usize, subject: &SubjectId) {
        if let Some(subjects) = self.available_at_slot.get_mut(slot) {
            subjects.retain(|s| s != subject);
        }
    }

    fn current_subject(&self) -> Option<SubjectId> {
        self.user_id.clone().filter(SubjectId::is_valid)
    }

    fn refresh_individual(&mut self, _subject: &SubjectId) {
        self.individual_refreshes += 1;
    }

    fn refresh_group(&mut self) {
        self.group_refreshes += 1;
    }
}
