use super::domain::{Candidate, CandidateId};
use serde::Serialize;
use tracing::debug;

pub const MAX_COMPARE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The set was full; nothing changed.
    Ignored,
}

/// Up to [`MAX_COMPARE`] candidates picked for side-by-side comparison,
/// kept in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSet {
    ids: Vec<CandidateId>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the candidate when present, otherwise appends it if there is room.
    pub fn toggle(&mut self, candidate: &Candidate) -> ToggleOutcome {
        let id = candidate.id;
        if self.remove(id) {
            return ToggleOutcome::Removed;
        }

        if self.ids.len() >= MAX_COMPARE {
            debug!(%id, limit = MAX_COMPARE, "comparison set full; toggle ignored");
            return ToggleOutcome::Ignored;
        }

        self.ids.push(id);
        ToggleOutcome::Added
    }

    /// Returns whether `id` was present.
    pub fn remove(&mut self, id: CandidateId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: CandidateId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[CandidateId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }
}
