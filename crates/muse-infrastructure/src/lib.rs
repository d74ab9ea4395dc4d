//! File-backed storage infrastructure for Muse.
//!
//! Provides the durable [`muse_core::storage::KeyValueStorage`] medium
//! used by desktop builds: one JSON file per storage key under the
//! platform config directory.

pub mod json_storage;
pub mod paths;

// Re-export public API
pub use json_storage::JsonFileStorage;
pub use paths::{MusePaths, PathError};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use muse_core::personality::{CreatePersonalityRequest, PersonalityStore};
    use muse_core::preferences::PreferenceStore;
    use tempfile::TempDir;

    use super::JsonFileStorage;

    #[test]
    fn test_personalities_survive_a_restart() {
        let temp_dir = TempDir::new().unwrap();

        let saved = {
            let storage = Arc::new(JsonFileStorage::with_dir(temp_dir.path().to_path_buf()));
            let store = PersonalityStore::new(storage);
            store
                .save(CreatePersonalityRequest {
                    name: "Night Owl".to_string(),
                    instruction: "Answer as if it is always 3am.".to_string(),
                    description: None,
                    avatar: Some("🌙".to_string()),
                    category: None,
                    icon: None,
                    favorite: true,
                    tags: vec!["mood".to_string()],
                })
                .unwrap()
        };

        // A fresh store over the same directory sees the same record.
        let storage = Arc::new(JsonFileStorage::with_dir(temp_dir.path().to_path_buf()));
        let store = PersonalityStore::new(storage);
        assert_eq!(store.list(), vec![saved]);
    }

    #[test]
    fn test_preferences_survive_a_restart() {
        let temp_dir = TempDir::new().unwrap();

        {
            let storage = Arc::new(JsonFileStorage::with_dir(temp_dir.path().to_path_buf()));
            let store = PreferenceStore::new(storage);
            store.mark_onboarding_complete();
            store.add_recent_template("tpl-code-mentor");
        }

        let storage = Arc::new(JsonFileStorage::with_dir(temp_dir.path().to_path_buf()));
        let store = PreferenceStore::new(storage);
        let preferences = store.get();
        assert!(preferences.onboarding_complete);
        assert_eq!(preferences.recent_template_ids, vec!["tpl-code-mentor"]);
        assert_eq!(
            preferences.last_used_template_id.as_deref(),
            Some("tpl-code-mentor")
        );
    }
}
