//! JSON file-backed key-value storage.
//!
//! Persists each storage key as a whole-value JSON text file with atomic
//! writes and an advisory file lock.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use muse_core::error::{MuseError, Result};
use muse_core::storage::KeyValueStorage;

use crate::paths::MusePaths;

/// A file-per-key storage medium.
///
/// Provides:
/// - **Atomicity**: writes are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: a lock file guards against concurrent writers
/// - **Durability**: explicit fsync before rename
///
/// Does NOT:
/// - Know about specific entities (Personality, Preferences)
/// - Validate blob contents (stores opaque text)
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage rooted at the default config directory
    /// (`~/.config/muse/`).
    pub fn new() -> Result<Self> {
        let dir = MusePaths::config_dir().map_err(|e| MuseError::data_access(e.to_string()))?;
        Ok(Self { dir })
    }

    /// Creates a storage rooted at a custom directory (for testing).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Gets a temporary file path for atomic writes.
    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{}.json.tmp", key))
    }
}

impl KeyValueStorage for JsonFileStorage {
    /// Reads the blob stored under `key`.
    ///
    /// A missing or empty file reads as `Ok(None)`.
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    /// Writes `value` under `key` atomically.
    ///
    /// Uses a temporary file + atomic rename to ensure durability.
    fn write(&self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        // Acquire exclusive lock for the key's file
        let _lock = FileLock::acquire(&self.file_path(key))?;

        // Write to temporary file in the same directory
        let tmp_path = self.temp_path(key);
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(value.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        // Atomic rename
        fs::rename(&tmp_path, self.file_path(key))?;

        Ok(())
    }
}

/// A file lock guard that automatically releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires an exclusive lock on the given path.
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Open or create lock file
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&lock_path)?;

        // Try to acquire exclusive lock with fs2
        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| MuseError::data_access(format!("Failed to acquire lock: {}", e)))?;
        }

        #[cfg(not(unix))]
        {
            // On non-Unix systems, we don't have file locking
            // This is acceptable for single-user desktop apps
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped
        // Try to remove lock file (best effort)
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::with_dir(temp_dir.path().to_path_buf());

        storage.write("preferences", r#"{"onboardingComplete":true}"#).unwrap();

        let loaded = storage.read("preferences").unwrap().unwrap();
        assert_eq!(loaded, r#"{"onboardingComplete":true}"#);
    }

    #[test]
    fn test_read_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::with_dir(temp_dir.path().to_path_buf());

        assert!(storage.read("preferences").unwrap().is_none());
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::with_dir(temp_dir.path().to_path_buf());
        fs::write(temp_dir.path().join("preferences.json"), "  \n").unwrap();

        assert!(storage.read("preferences").unwrap().is_none());
    }

    #[test]
    fn test_write_replaces_previous_blob() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::with_dir(temp_dir.path().to_path_buf());

        storage.write("personalities", "[]").unwrap();
        storage.write("personalities", r#"[{"id":"p-1"}]"#).unwrap();

        assert_eq!(
            storage.read("personalities").unwrap().unwrap(),
            r#"[{"id":"p-1"}]"#
        );
    }

    #[test]
    fn test_atomic_write_leaves_no_residue() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::with_dir(temp_dir.path().to_path_buf());

        storage.write("personalities", "[]").unwrap();

        assert!(!temp_dir.path().join(".personalities.json.tmp").exists());
        assert!(temp_dir.path().join("personalities.json").exists());
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("muse");
        let storage = JsonFileStorage::with_dir(nested.clone());

        storage.write("preferences", "{}").unwrap();

        assert!(nested.join("preferences.json").exists());
    }
}
