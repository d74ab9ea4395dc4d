//! Template domain model.

use serde::{Deserialize, Serialize};

/// Skill level a template is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A curated starter template for the personality gallery.
///
/// Templates ship with the application and are never mutated or
/// persisted; preferences reference them by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Gallery category
    pub category: String,
    /// Short description shown on the gallery card
    pub description: String,
    /// Visual icon/emoji
    pub icon: String,
    /// The system instruction applied when the template is selected
    pub instruction: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Relative popularity score used to fill the featured shelf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
    /// Skill level this template targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Whether the template is pinned to the featured shelf
    #[serde(default)]
    pub featured: bool,
    /// Example questions shown when previewing the template
    #[serde(default)]
    pub sample_questions: Vec<String>,
}
