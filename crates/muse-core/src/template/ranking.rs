//! Template gallery ranking helpers.
//!
//! Pure functions combining the static catalog with the preference
//! record to produce the gallery's featured, recent and favorite views.

use crate::preferences::Preferences;

use super::model::Template;

/// Default number of entries on the featured shelf.
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// Default number of entries in the recent row.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Returns the featured shelf.
///
/// Featured-flagged templates come first, in catalog order. When fewer
/// than `limit` are flagged, the remaining slots are filled with the
/// highest-popularity unflagged templates (missing popularity counts as
/// 0, ties keep catalog order). Never exceeds `limit`; may return fewer
/// when the catalog itself is smaller.
pub fn featured_templates(templates: &[Template], limit: usize) -> Vec<&Template> {
    let mut shelf: Vec<&Template> = templates.iter().filter(|t| t.featured).collect();
    shelf.truncate(limit);

    if shelf.len() < limit {
        let mut fill: Vec<&Template> = templates.iter().filter(|t| !t.featured).collect();
        fill.sort_by(|a, b| b.popularity.unwrap_or(0).cmp(&a.popularity.unwrap_or(0)));
        fill.truncate(limit - shelf.len());
        shelf.extend(fill);
    }
    shelf
}

/// Maps the preference record's recent-template ids to catalog entries,
/// most recent first.
///
/// Ids without a matching template (e.g. removed from the catalog) are
/// dropped before truncating to `limit`.
pub fn recent_templates<'a>(
    templates: &'a [Template],
    preferences: &Preferences,
    limit: usize,
) -> Vec<&'a Template> {
    preferences
        .recent_template_ids
        .iter()
        .filter_map(|id| templates.iter().find(|t| &t.id == id))
        .take(limit)
        .collect()
}

/// Returns favorited templates in catalog order.
///
/// Catalog order, not favorite-insertion order: favorites carry no
/// meaningful recency, unlike the recent row.
pub fn favorite_templates<'a>(
    templates: &'a [Template],
    preferences: &Preferences,
) -> Vec<&'a Template> {
    templates
        .iter()
        .filter(|t| preferences.favorite_template_ids.contains(&t.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(id: &str, featured: bool, popularity: Option<u32>) -> Template {
        Template {
            id: id.to_string(),
            name: id.to_string(),
            category: "test".to_string(),
            description: String::new(),
            icon: "⭐".to_string(),
            instruction: "Be helpful.".to_string(),
            tags: Vec::new(),
            popularity,
            difficulty: None,
            featured,
            sample_questions: Vec::new(),
        }
    }

    fn preferences(favorites: &[&str], recent: &[&str]) -> Preferences {
        Preferences {
            favorite_template_ids: favorites.iter().map(|s| s.to_string()).collect(),
            recent_template_ids: recent.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn ids(templates: &[&Template]) -> Vec<String> {
        templates.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_featured_precede_fill() {
        let catalog = vec![
            template("a", false, Some(100)),
            template("b", true, Some(1)),
            template("c", false, Some(50)),
            template("d", true, None),
        ];

        let shelf = featured_templates(&catalog, 3);
        assert_eq!(ids(&shelf), vec!["b", "d", "a"]);
    }

    #[test]
    fn test_fill_sorted_by_popularity_with_catalog_order_ties() {
        let catalog = vec![
            template("a", false, None),
            template("b", false, Some(10)),
            template("c", false, None),
            template("d", false, Some(20)),
        ];

        let shelf = featured_templates(&catalog, 4);
        // Missing popularity counts as 0; a before c by catalog order.
        assert_eq!(ids(&shelf), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_featured_never_exceeds_limit() {
        let catalog = vec![
            template("a", true, None),
            template("b", true, None),
            template("c", true, None),
        ];
        assert_eq!(featured_templates(&catalog, 2).len(), 2);
    }

    #[test]
    fn test_featured_on_small_catalog() {
        let catalog = vec![template("a", false, Some(5))];
        assert_eq!(featured_templates(&catalog, DEFAULT_FEATURED_LIMIT).len(), 1);
    }

    #[test]
    fn test_recent_preserves_preference_order_and_drops_unknown_ids() {
        let catalog = vec![
            template("a", false, None),
            template("b", false, None),
            template("c", false, None),
        ];
        let preferences = preferences(&[], &["c", "deleted", "a"]);

        let recent = recent_templates(&catalog, &preferences, DEFAULT_RECENT_LIMIT);
        assert_eq!(ids(&recent), vec!["c", "a"]);
    }

    #[test]
    fn test_recent_truncates_to_limit() {
        let catalog = vec![
            template("a", false, None),
            template("b", false, None),
            template("c", false, None),
        ];
        let preferences = preferences(&[], &["a", "b", "c"]);

        assert_eq!(recent_templates(&catalog, &preferences, 2).len(), 2);
    }

    #[test]
    fn test_favorites_in_catalog_order() {
        let catalog = vec![
            template("a", false, None),
            template("b", false, None),
            template("c", false, None),
        ];
        // Favorited c before a; the view still follows the catalog.
        let preferences = preferences(&["c", "a"], &[]);

        let favorites = favorite_templates(&catalog, &preferences);
        assert_eq!(ids(&favorites), vec!["a", "c"]);
    }
}
