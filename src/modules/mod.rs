//! UI Modules
//!
//! Each module implements the Module trait and handles its own:
//! - Key input processing
//! - Rendering
//!
//! Modules:
//! - sidebar: primary navigation and category filter
//! - locations: location list and details for the current route

pub mod locations;
pub mod sidebar;
