use std::sync::Arc;

use super::ports::KeyValueStorage;
use crate::kernel::persisted::PersistedState;

/// Storage key for the workbench snapshot. Bump the version suffix on incompatible schema
/// changes; blobs under the old key are then simply never read.
pub const STORAGE_KEY: &str = "zbench.workbench.v1";

/// Best-effort persistence of [`PersistedState`]. Never fails from the caller's view.
#[derive(Clone)]
pub struct PersistenceBridge {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl PersistenceBridge {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Missing, unreadable, malformed and empty snapshots all read as `None`.
    pub fn load(&self) -> Option<PersistedState> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no persisted workbench state");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "failed to read workbench state");
                return None;
            }
        };

        match serde_json::from_str::<PersistedState>(&raw) {
            Ok(state) if state.files.is_empty() => {
                tracing::warn!(key = %self.key, "persisted workbench state has no files");
                None
            }
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "malformed workbench state");
                None
            }
        }
    }

    pub fn save(&self, state: &PersistedState) {
        let raw = match serde_json::to_string(state) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize workbench state");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &raw) {
            tracing::warn!(error = %e, key = %self.key, "failed to persist workbench state");
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/persistence.rs"]
mod tests;
