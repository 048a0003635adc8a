use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::kernel::services::ports::EditorEngine;

pub const DEFAULT_VIEW_STATE_CAPACITY: usize = 64;

/// Engine-defined snapshot of scroll, cursor and folding. Opaque to the workbench.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewState(serde_json::Value);

impl ViewState {
    pub fn new(raw: serde_json::Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

#[derive(Debug)]
struct Entry {
    state: ViewState,
    last_used: u64,
}

/// Per-file view state for the session, keyed by file id. Never persisted.
///
/// Bounded: the least recently used entry is evicted past `capacity`.
#[derive(Debug)]
pub struct ViewStateCache {
    entries: FxHashMap<String, Entry>,
    capacity: usize,
    clock: u64,
}

impl Default for ViewStateCache {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_STATE_CAPACITY)
    }
}

impl ViewStateCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity: capacity.max(1),
            clock: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&ViewState> {
        self.entries.get(id).map(|entry| &entry.state)
    }

    pub fn insert(&mut self, id: &str, state: ViewState) {
        self.clock += 1;
        let last_used = self.clock;
        self.entries
            .insert(id.to_string(), Entry { state, last_used });
        self.evict_over_capacity();
    }

    /// Drops entries for files that are no longer open. Returns how many were removed.
    pub fn retain_open<'a>(&mut self, open_ids: impl IntoIterator<Item = &'a str>) -> usize {
        let open: Vec<&str> = open_ids.into_iter().collect();
        let before = self.entries.len();
        self.entries.retain(|id, _| open.contains(&id.as_str()));
        before - self.entries.len()
    }

    /// Stores the engine's current view state under `id`. No-op without a mounted engine.
    pub fn capture(&mut self, id: &str, engine: &dyn EditorEngine) -> bool {
        if !engine.is_mounted() {
            return false;
        }
        match engine.save_view_state() {
            Some(state) => {
                self.insert(id, state);
                true
            }
            None => false,
        }
    }

    /// Applies the stored view state for `id` and focuses the engine.
    ///
    /// Without a snapshot the engine keeps its default view for the new content.
    pub fn restore(&mut self, id: &str, engine: &dyn EditorEngine) -> bool {
        if !engine.is_mounted() {
            return false;
        }
        self.clock += 1;
        let clock = self.clock;
        let Some(entry) = self.entries.get_mut(id) else {
            return false;
        };
        entry.last_used = clock;
        engine.restore_view_state(&entry.state);
        engine.focus();
        true
    }

    fn evict_over_capacity(&mut self) {
        while self.entries.len() > self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    tracing::trace!(id = %id, "evicting view state");
                    self.entries.remove(&id);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/view_state.rs"]
mod tests;
