//! Preference store service.
//!
//! Read-modify-write operations over the single preference record,
//! persisted as one JSON blob under its storage key.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use crate::error::Result;
use crate::event::{ChangeFeed, StoreEvent};
use crate::storage::{KeyValueStorage, PREFERENCES_KEY};

use super::{Preferences, PreferencesPatch, RECENT_TEMPLATE_CAP};

/// Store for the per-user preference record.
///
/// Read faults degrade to the default record; write faults are reported
/// as a `false` result and never raised.
pub struct PreferenceStore {
    storage: Arc<dyn KeyValueStorage>,
    events: ChangeFeed,
}

impl PreferenceStore {
    /// Creates a store over the given storage medium.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            events: ChangeFeed::new(),
        }
    }

    /// Subscribes to change notifications for this store.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Returns the current preference record.
    ///
    /// A missing record yields the default, which is persisted
    /// immediately so the first read becomes durable. A read or parse
    /// fault yields the default without persisting it, to avoid
    /// compounding a storage fault with another write.
    pub fn get(&self) -> Preferences {
        match self.storage.read(PREFERENCES_KEY) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(preferences) => preferences,
                Err(e) => {
                    tracing::warn!("Discarding malformed preference record: {}", e);
                    Preferences::default()
                }
            },
            Ok(None) => {
                let defaults = Preferences::default();
                if let Err(e) = self.persist(&defaults) {
                    tracing::warn!("Failed to persist default preferences: {}", e);
                }
                defaults
            }
            Err(e) => {
                tracing::warn!("Failed to read preference record: {}", e);
                Preferences::default()
            }
        }
    }

    /// Merges the patch over the stored record and persists the result.
    ///
    /// Returns whether the write succeeded.
    pub fn set(&self, patch: PreferencesPatch) -> bool {
        let mut preferences = self.get();
        patch.apply(&mut preferences);

        if let Err(e) = self.persist(&preferences) {
            tracing::warn!("Failed to persist preferences: {}", e);
            return false;
        }
        self.events.emit(StoreEvent::PreferencesChanged);
        true
    }

    /// Marks the first-run onboarding flow as finished.
    pub fn mark_onboarding_complete(&self) -> bool {
        self.set(PreferencesPatch {
            onboarding_complete: Some(true),
            ..Default::default()
        })
    }

    /// Moves `template_id` to the front of the recent list and records
    /// it as the last-used template, in one merged write.
    ///
    /// The list is capped at [`RECENT_TEMPLATE_CAP`] entries; the oldest
    /// entry is evicted when the cap is exceeded.
    pub fn add_recent_template(&self, template_id: &str) -> bool {
        let mut recent = self.get().recent_template_ids;
        recent.retain(|id| id != template_id);
        recent.insert(0, template_id.to_string());
        recent.truncate(RECENT_TEMPLATE_CAP);

        self.set(PreferencesPatch {
            last_used_template_id: Some(template_id.to_string()),
            recent_template_ids: Some(recent),
            ..Default::default()
        })
    }

    /// Toggles membership of `template_id` in the favorite list and
    /// returns the resulting membership.
    ///
    /// A failed write leaves the stored membership unchanged and the
    /// return value reflects that.
    pub fn toggle_template_favorite(&self, template_id: &str) -> bool {
        let mut favorites = self.get().favorite_template_ids;
        let was_favorite = favorites.iter().any(|id| id == template_id);
        if was_favorite {
            favorites.retain(|id| id != template_id);
        } else {
            favorites.push(template_id.to_string());
        }

        let written = self.set(PreferencesPatch {
            favorite_template_ids: Some(favorites),
            ..Default::default()
        });
        if written { !was_favorite } else { was_favorite }
    }

    /// Whether `template_id` is currently favorited.
    ///
    /// Returns `false` on any storage fault.
    pub fn is_template_favorite(&self, template_id: &str) -> bool {
        self.get()
            .favorite_template_ids
            .iter()
            .any(|id| id == template_id)
    }

    fn persist(&self, preferences: &Preferences) -> Result<()> {
        let blob = serde_json::to_string(preferences)?;
        self.storage.write(PREFERENCES_KEY, &blob)
    }
}
