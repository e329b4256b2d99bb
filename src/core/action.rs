//! Actions that modules can return to communicate with the app

use crate::domain::{CategoryFilter, LocationId};

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch to a route, e.g. `/favorites`
    Navigate(String),

    /// Return to the previous route
    Back,

    /// Change the category filter
    SelectCategory(CategoryFilter),

    /// Flip the favorite flag of a location
    ToggleFavorite(LocationId),

    /// Open a location, recording it in the recents list
    Open(LocationId),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Open command line
    OpenCommand,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
