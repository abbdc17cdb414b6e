//! Selection persistence port

use shelfie_domain::SelectionSet;

/// Durable storage for the selection set.
///
/// The full id list is written after every mutation (last-write-wins; the
/// store has a single writer per session). Restoration is defensive:
/// malformed persisted data yields an empty set, never an error. Write
/// failures are logged by the adapter and otherwise ignored — losing a
/// save must not break the session.
pub trait SelectionStore: Send + Sync {
    fn load(&self) -> SelectionSet;
    fn save(&self, selection: &SelectionSet);
}

/// In-memory no-op store for tests and ephemeral sessions.
pub struct NoSelectionStore;

impl SelectionStore for NoSelectionStore {
    fn load(&self) -> SelectionSet {
        SelectionSet::new()
    }

    fn save(&self, _selection: &SelectionSet) {}
}
