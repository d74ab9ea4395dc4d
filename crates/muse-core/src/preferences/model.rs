//! Preference domain model.
//!
//! A single per-user record tracking onboarding progress and how the
//! user interacts with the template gallery.

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the recent-template list.
pub const RECENT_TEMPLATE_CAP: usize = 10;

/// Per-user preference record.
///
/// One record per storage medium. Every write merges a
/// [`PreferencesPatch`] over the persisted value, never replaces it
/// blindly, so logical updates to different fields cannot clobber each
/// other within a process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Whether the user finished the first-run onboarding flow
    #[serde(default)]
    pub onboarding_complete: bool,

    /// Template last applied to a conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_template_id: Option<String>,

    /// Favorited template ids, insertion order, no duplicates
    #[serde(default)]
    pub favorite_template_ids: Vec<String>,

    /// Recently used template ids, most recent first, capped at
    /// [`RECENT_TEMPLATE_CAP`] entries
    #[serde(default)]
    pub recent_template_ids: Vec<String>,
}

/// Partial update merged over the stored preference record.
///
/// Fields left as `None` survive the merge untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarding_complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_template_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_template_ids: Option<Vec<String>>,
}

impl PreferencesPatch {
    /// Overwrites the named fields of `preferences` with the patch values.
    pub(crate) fn apply(self, preferences: &mut Preferences) {
        if let Some(onboarding_complete) = self.onboarding_complete {
            preferences.onboarding_complete = onboarding_complete;
        }
        if let Some(last_used_template_id) = self.last_used_template_id {
            preferences.last_used_template_id = Some(last_used_template_id);
        }
        if let Some(favorite_template_ids) = self.favorite_template_ids {
            preferences.favorite_template_ids = favorite_template_ids;
        }
        if let Some(recent_template_ids) = self.recent_template_ids {
            preferences.recent_template_ids = recent_template_ids;
        }
    }
}
