//! Personality domain module.
//!
//! This module contains the personality domain model, creation/update
//! request models, and the store service that persists the collection.
//!
//! # Module Structure
//!
//! - `model`: Core domain model (`Personality`)
//! - `request`: Creation and partial-update requests
//! - `store`: The persistence service (`PersonalityStore`)

mod model;
mod request;
mod store;

// Re-export public API
pub use model::Personality;
pub use request::{CreatePersonalityRequest, PersonalityPatch};
pub use store::{DEFAULT_RECENT_LIMIT, PersonalityStore};
