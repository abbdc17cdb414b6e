//! File-backed selection persistence.
//!
//! The durable analog of the browser's `selectedProductIds` storage key:
//! a single JSON array of product ids, read and written wholesale.

use shelfie_application::SelectionStore;
use shelfie_domain::SelectionSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Selection store writing the full id list to one JSON file.
///
/// Last-write-wins; there is a single writer per session. Restoration is
/// defensive — a missing file or malformed payload yields an empty set.
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for FileSelectionStore {
    fn load(&self) -> SelectionSet {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => SelectionSet::from_persisted_json(&payload),
            Err(e) => {
                debug!(
                    "No persisted selection at {}: {}",
                    self.path.display(),
                    e
                );
                SelectionSet::new()
            }
        }
    }

    fn save(&self, selection: &SelectionSet) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create selection directory {}: {}",
                parent.display(),
                e
            );
            return;
        }

        let payload = match serde_json::to_string(selection.all()) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Could not encode selection: {}", e);
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.path, payload) {
            warn!(
                "Could not persist selection to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
