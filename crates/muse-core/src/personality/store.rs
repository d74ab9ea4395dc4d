//! Personality store service.
//!
//! CRUD operations over the personality collection, persisted as one
//! JSON array under a single storage key. Every call reads the full
//! collection, mutates it in memory and writes it back; the storage
//! medium is the sole source of truth between calls.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use chrono::Utc;

use crate::error::Result;
use crate::event::{ChangeFeed, StoreEvent};
use crate::storage::{KeyValueStorage, PERSONALITIES_KEY};

use super::{CreatePersonalityRequest, Personality, PersonalityPatch};

/// Default number of entries returned by [`PersonalityStore::recent`].
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Store for user-created personalities.
///
/// Read faults (missing key, corrupt blob, medium errors) degrade to an
/// empty collection. Write faults are reported per operation;
/// [`save`](Self::save) is the one path that propagates them.
pub struct PersonalityStore {
    storage: Arc<dyn KeyValueStorage>,
    events: ChangeFeed,
}

impl PersonalityStore {
    /// Creates a store over the given storage medium.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            events: ChangeFeed::new(),
        }
    }

    /// Subscribes to change notifications for this store.
    ///
    /// An event is delivered after every successful mutation.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Returns the full collection in insertion order.
    ///
    /// Returns an empty collection when nothing is stored or the stored
    /// blob is unreadable; malformed data is treated as absence.
    pub fn list(&self) -> Vec<Personality> {
        let blob = match self.storage.read(PERSONALITIES_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read personality collection: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(personalities) => personalities,
            Err(e) => {
                tracing::warn!("Discarding malformed personality collection: {}", e);
                Vec::new()
            }
        }
    }

    /// Saves a new personality and returns the stored record.
    ///
    /// The store assigns the id, creation timestamp and use count; the
    /// caller's values for those are never accepted. A storage-write
    /// fault propagates to the caller.
    pub fn save(&self, request: CreatePersonalityRequest) -> Result<Personality> {
        let personality = request.into_personality();
        let mut personalities = self.list();
        personalities.push(personality.clone());
        self.persist(&personalities)?;
        self.events.emit(StoreEvent::PersonalityCreated {
            id: personality.id.clone(),
        });
        Ok(personality)
    }

    /// Applies a partial update to the personality with the given id.
    ///
    /// Returns `None` without side effects when the id is unknown, and
    /// `None` when the write fails (the stored collection is unchanged).
    pub fn update(&self, id: &str, patch: PersonalityPatch) -> Option<Personality> {
        let mut personalities = self.list();
        let target = personalities.iter_mut().find(|p| p.id == id)?;
        patch.apply(target);
        let updated = target.clone();

        if let Err(e) = self.persist(&personalities) {
            tracing::warn!("Failed to persist update for personality '{}': {}", id, e);
            return None;
        }
        self.events.emit(StoreEvent::PersonalityUpdated {
            id: updated.id.clone(),
        });
        Some(updated)
    }

    /// Deletes the personality with the given id.
    ///
    /// Returns whether a record was removed. The filtered collection is
    /// persisted even when nothing matched.
    pub fn delete(&self, id: &str) -> bool {
        let mut personalities = self.list();
        let before = personalities.len();
        personalities.retain(|p| p.id != id);
        let removed = personalities.len() < before;

        if let Err(e) = self.persist(&personalities) {
            tracing::warn!("Failed to persist deletion of personality '{}': {}", id, e);
            return false;
        }
        if removed {
            self.events.emit(StoreEvent::PersonalityDeleted { id: id.to_string() });
        }
        removed
    }

    /// Records a use: stamps the last-used time and increments the use
    /// count relative to the stored value.
    ///
    /// Silently does nothing when the id is unknown.
    pub fn record_use(&self, id: &str) {
        self.touch(id, true);
    }

    /// Stamps the last-used time without changing the use count.
    ///
    /// Silently does nothing when the id is unknown.
    pub fn mark_used(&self, id: &str) {
        self.touch(id, false);
    }

    fn touch(&self, id: &str, bump_count: bool) {
        let mut personalities = self.list();
        let Some(target) = personalities.iter_mut().find(|p| p.id == id) else {
            return;
        };
        target.last_used = Some(Utc::now());
        if bump_count {
            target.use_count += 1;
        }

        if let Err(e) = self.persist(&personalities) {
            tracing::warn!("Failed to persist use of personality '{}': {}", id, e);
            return;
        }
        self.events.emit(StoreEvent::PersonalityUsed { id: id.to_string() });
    }

    /// Flips the favorite flag and returns the resulting value.
    ///
    /// Returns `false` when the id is unknown. A failed write leaves the
    /// stored flag unchanged and the return value reflects that.
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let mut personalities = self.list();
        let Some(target) = personalities.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        target.favorite = !target.favorite;
        let favorite = target.favorite;

        if let Err(e) = self.persist(&personalities) {
            tracing::warn!("Failed to persist favorite toggle for '{}': {}", id, e);
            return !favorite;
        }
        self.events.emit(StoreEvent::FavoriteToggled {
            id: id.to_string(),
            favorite,
        });
        favorite
    }

    /// Returns the most recently used personalities, most recent first.
    ///
    /// Records that were never used are excluded; equal timestamps keep
    /// insertion order.
    pub fn recent(&self, limit: usize) -> Vec<Personality> {
        let mut used: Vec<Personality> = self
            .list()
            .into_iter()
            .filter(|p| p.last_used.is_some())
            .collect();
        used.sort_by(|a, b| b.last_used.cmp(&a.last_used));
        used.truncate(limit);
        used
    }

    /// Returns all favorited personalities in insertion order.
    pub fn favorites(&self) -> Vec<Personality> {
        self.list().into_iter().filter(|p| p.favorite).collect()
    }

    fn persist(&self, personalities: &[Personality]) -> Result<()> {
        let blob = serde_json::to_string(personalities)?;
        self.storage.write(PERSONALITIES_KEY, &blob)
    }
}
