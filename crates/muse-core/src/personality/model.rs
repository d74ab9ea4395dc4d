//! Personality domain model.
//!
//! A personality is a user-authored system instruction that shapes the
//! assistant's behavior, plus the bookkeeping the library surfaces need
//! (usage recency, favorites, tags).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-created AI personality.
///
/// The `id`, `created_at` and `use_count` fields are assigned by the
/// store at creation time, never by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    /// Unique identifier (UUID v4 format)
    pub id: String,
    /// Display name of the personality
    pub name: String,
    /// The system instruction sent to the assistant
    pub instruction: String,
    /// Short description shown in the library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Avatar glyph shown next to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Category the personality is filed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional visual icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Creation timestamp, set once and never changed
    pub created_at: DateTime<Utc>,
    /// Last time the personality was applied to a conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
    /// Number of times the personality was applied
    #[serde(default)]
    pub use_count: u32,
    /// Whether the user pinned this personality as a favorite
    #[serde(default)]
    pub favorite: bool,
    /// Free-form tags, insertion order preserved
    #[serde(default)]
    pub tags: Vec<String>,
}
