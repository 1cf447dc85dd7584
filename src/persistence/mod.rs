//! Object snapshot save/load
//!
//! Features:
//! - JSON snapshot of every placed object under a fixed key
//! - Restore by replaying placements, so restored objects obey the
//!   same admission rules as clicked ones
//! - Missing or corrupt data is treated as an empty plank

mod store;

pub use store::{KeyValueStore, MemoryStore, StoreError};
#[cfg(test)]
pub(crate) use store::FailingStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::SeesawState;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One stored object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    pub distance_from_pivot: f32,
    pub weight: u32,
    /// Written for readers that want it; ignored on restore
    #[serde(default)]
    pub size: f32,
}

/// Stored form of the whole plank
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub objects: Vec<ObjectRecord>,
}

impl Snapshot {
    pub fn capture(state: &SeesawState) -> Self {
        let config = state.config();
        Self {
            objects: state
                .objects()
                .iter()
                .map(|obj| ObjectRecord {
                    distance_from_pivot: obj.distance_from_pivot,
                    weight: obj.weight,
                    size: config.size_for(obj.weight),
                })
                .collect(),
        }
    }
}

/// Saves and restores a `SeesawState` through a key-value store
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "backup";

    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the full object list
    pub fn try_save(&mut self, state: &SeesawState) -> Result<(), PersistError> {
        let json = serde_json::to_string(&Snapshot::capture(state))?;
        self.store.set(Self::STORAGE_KEY, &json)?;
        Ok(())
    }

    /// Like `try_save`, but a failure only gets logged
    pub fn save(&mut self, state: &SeesawState) {
        match self.try_save(state) {
            Ok(()) => log::debug!("Saved {} objects", state.objects().len()),
            Err(e) => log::warn!("Save failed: {e}"),
        }
    }

    /// Read the stored snapshot. `None` when absent or unreadable.
    pub fn load(&self) -> Option<Snapshot> {
        let json = match self.store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Snapshot read failed: {e}");
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("Discarding corrupt snapshot: {e}");
                None
            }
        }
    }

    /// Replay the stored objects into `state` in saved order.
    /// Returns how many were admitted.
    pub fn restore(&mut self, state: &mut SeesawState) -> usize {
        let Some(snapshot) = self.load() else {
            log::info!("No saved seesaw, starting empty");
            return 0;
        };

        let total = snapshot.objects.len();
        let mut admitted = 0;
        for rec in &snapshot.objects {
            if state
                .try_place(rec.distance_from_pivot, rec.weight)
                .is_admitted()
            {
                admitted += 1;
            }
        }

        if admitted < total {
            log::warn!("Dropped {} saved objects that no longer fit", total - admitted);
            self.save(state);
        }
        log::info!("Restored {admitted} objects");
        admitted
    }

    /// Forget the stored snapshot
    pub fn clear(&mut self) {
        match self.store.remove(Self::STORAGE_KEY) {
            Ok(()) => log::info!("Saved seesaw cleared"),
            Err(e) => log::warn!("Clearing saved seesaw failed: {e}"),
        }
    }
}
