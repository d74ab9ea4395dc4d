//! Personality creation and update request models.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Personality;

/// Request to create a new personality.
///
/// The store accepts any request as-is; callers (forms, import flows)
/// are expected to run [`validate`](Self::validate) before saving.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonalityRequest {
    /// Display name (required)
    pub name: String,

    /// System instruction text (required)
    pub instruction: String,

    /// Optional short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional avatar glyph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Optional category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Optional visual icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Whether to pin the new personality as a favorite immediately
    #[serde(default)]
    pub favorite: bool,

    /// Initial tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreatePersonalityRequest {
    /// Validate the request and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required and cannot be empty".to_string());
        }

        if self.instruction.trim().is_empty() {
            return Err("Instruction is required and cannot be empty".to_string());
        }

        Ok(())
    }

    /// Convert this request into a Personality, always generating a new
    /// UUID and stamping the creation time.
    pub fn into_personality(self) -> Personality {
        Personality {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            instruction: self.instruction,
            description: self.description,
            avatar: self.avatar,
            category: self.category,
            icon: self.icon,
            created_at: Utc::now(),
            last_used: None,
            use_count: 0,
            favorite: self.favorite,
            tags: self.tags,
        }
    }
}

/// Partial update applied to an existing personality.
///
/// Only the fields that are `Some` overwrite the stored record; every
/// other field survives untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl PersonalityPatch {
    /// Overwrites the named fields of `personality` with the patch values.
    pub(crate) fn apply(self, personality: &mut Personality) {
        if let Some(name) = self.name {
            personality.name = name;
        }
        if let Some(instruction) = self.instruction {
            personality.instruction = instruction;
        }
        if let Some(description) = self.description {
            personality.description = Some(description);
        }
        if let Some(avatar) = self.avatar {
            personality.avatar = Some(avatar);
        }
        if let Some(category) = self.category {
            personality.category = Some(category);
        }
        if let Some(icon) = self.icon {
            personality.icon = Some(icon);
        }
        if let Some(favorite) = self.favorite {
            personality.favorite = favorite;
        }
        if let Some(tags) = self.tags {
            personality.tags = tags;
        }
    }
}
