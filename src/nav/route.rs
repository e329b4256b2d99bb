//! Route paths understood by the sidebar
//!
//! Active-state checks compare these strings exactly: no prefix matching and
//! no trailing-slash normalization.

use crate::store::ListScope;

pub const ALL: &str = "/";
pub const FAVORITES: &str = "/favorites";
pub const RECENTS: &str = "/recents";

/// List shown by the main panel for `route`, if the route is known
pub fn scope_for(route: &str) -> Option<ListScope> {
    match route {
        ALL => Some(ListScope::All),
        FAVORITES => Some(ListScope::Favorites),
        RECENTS => Some(ListScope::Recents),
        _ => None,
    }
}

/// Current route plus the routes visited before it
#[derive(Debug, Clone)]
pub struct RouteHistory {
    current: String,
    back: Vec<String>,
}

impl RouteHistory {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current: start.into(),
            back: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Navigate to `route`; returns `false` when already there
    pub fn push(&mut self, route: impl Into<String>) -> bool {
        let route = route.into();
        if route == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.back.push(previous);
        true
    }

    pub fn go_back(&mut self) -> Option<&str> {
        let previous = self.back.pop()?;
        self.current = previous;
        Some(self.current.as_str())
    }
}

impl Default for RouteHistory {
    fn default() -> Self {
        Self::new(ALL)
    }
}
