//! Template domain module.
//!
//! - `model`: Read-only template model shipped with the application
//! - `catalog`: The built-in starter catalog
//! - `ranking`: Pure gallery-ranking helpers (featured/recent/favorites)

mod catalog;
mod model;
mod ranking;

// Re-export public API
pub use catalog::builtin_templates;
pub use model::{Difficulty, Template};
pub use ranking::{
    DEFAULT_FEATURED_LIMIT, DEFAULT_RECENT_LIMIT, favorite_templates, featured_templates,
    recent_templates,
};
