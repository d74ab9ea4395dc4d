//! Storage capability abstraction.
//!
//! Stores persist whole-value text blobs under string keys. The trait
//! decouples store logic from the storage mechanism (JSON files, an
//! in-memory map, a browser-profile database) so tests can substitute an
//! in-memory implementation for the real medium.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;

/// Storage key for the personality collection.
pub const PERSONALITIES_KEY: &str = "personalities";

/// Storage key for the preference record.
pub const PREFERENCES_KEY: &str = "preferences";

/// An abstract keyed storage medium for whole-value text blobs.
///
/// # Implementation Notes
///
/// Implementations should treat a missing key as `Ok(None)`, not an
/// error; stores rely on that to distinguish "nothing saved yet" from a
/// faulted medium.
pub trait KeyValueStorage: Send + Sync {
    /// Reads the blob stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: the stored blob
    /// - `Ok(None)`: nothing is stored under `key`
    /// - `Err(MuseError)`: the medium faulted
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous blob.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// An in-memory [`KeyValueStorage`] backed by a hash map.
///
/// Used by tests and by embedders that have no durable medium available.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates a new empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
