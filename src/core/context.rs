//! Shared context passed to modules

use crate::domain::LocationId;
use crate::nav::route::{self, RouteHistory};
use crate::nav::SidebarModel;
use crate::store::{ListScope, Snapshot};

/// Derived view state available to all modules.
///
/// Rebuilt from the store by `App::sync_context`; modules only read it.
#[derive(Debug, Clone)]
pub struct Context {
    /// Current route and back history
    pub routes: RouteHistory,

    /// Sidebar entries for the current route and store revision
    pub sidebar: SidebarModel,

    /// Ids of the locations listed in the main panel, in display order
    pub visible: Vec<LocationId>,
}

impl Context {
    pub fn new(start_route: &str, snapshot: &Snapshot<'_>) -> Self {
        let routes = RouteHistory::new(start_route);
        let sidebar = SidebarModel::build(routes.current(), snapshot);
        let visible = visible_ids(routes.current(), snapshot);
        Self {
            routes,
            sidebar,
            visible,
        }
    }

    pub fn route(&self) -> &str {
        self.routes.current()
    }

    /// Rebuild derived state if the store or route moved; returns whether it did
    pub fn refresh(&mut self, snapshot: &Snapshot<'_>) -> bool {
        if !self.sidebar.is_stale(self.routes.current(), snapshot.revision()) {
            return false;
        }
        self.sidebar = SidebarModel::build(self.routes.current(), snapshot);
        self.visible = visible_ids(self.routes.current(), snapshot);
        true
    }
}

/// Unknown routes show nothing
fn visible_ids(current_route: &str, snapshot: &Snapshot<'_>) -> Vec<LocationId> {
    let Some(scope) = route::scope_for(current_route) else {
        return Vec::new();
    };
    list_ids(scope, snapshot)
}

fn list_ids(scope: ListScope, snapshot: &Snapshot<'_>) -> Vec<LocationId> {
    snapshot
        .visible_locations(scope)
        .into_iter()
        .map(|location| location.id.clone())
        .collect()
}
