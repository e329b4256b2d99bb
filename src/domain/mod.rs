//! Location domain models
//!
//! Plain data records shared by the store, the navigation presenter and the
//! UI. Nothing here knows about rendering or terminals.

pub mod icons;
mod location;

pub use icons::{glyph_for, Glyph, DEFAULT_GLYPH};
pub use location::{Category, CategoryFilter, CategoryId, Location, LocationId, ALL_SENTINEL};
