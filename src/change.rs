//! Change detection between the live state and the last synchronized snapshot.

use crate::state::SystemState;

/// Returns `true` when any field of `current` differs from `previous`.
#[inline]
pub fn state_changed(current: &SystemState, previous: &SystemState) -> bool {
    current != previous
}

/// Holds the state the outputs were last synchronized to.
///
/// The snapshot starts empty, which counts as changed, so the first
/// comparison always triggers a refresh. It is replaced only through
/// [`commit`](Self::commit), after the outputs have been refreshed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotTracker {
    previous: Option<SystemState>,
}

impl SnapshotTracker {
    /// Creates a tracker with no snapshot.
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Whether `current` differs from the last committed snapshot.
    pub fn has_changed(&self, current: &SystemState) -> bool {
        match &self.previous {
            Some(previous) => state_changed(current, previous),
            None => true,
        }
    }

    /// Replaces the snapshot with `current`.
    pub fn commit(&mut self, current: &SystemState) {
        self.previous = Some(*current);
    }

    /// The last committed snapshot, if any.
    pub fn snapshot(&self) -> Option<&SystemState> {
        self.previous.as_ref()
    }
}
