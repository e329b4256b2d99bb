//! Navigation presenter
//!
//! Turns a store [`Snapshot`] and the current route into view-ready sidebar
//! entries. Nothing here draws; the `ui` module consumes the output.

pub mod route;

use crate::domain::icons::{FAVORITE_GLYPH, RECENT_GLYPH};
use crate::domain::{glyph_for, CategoryFilter, Glyph, DEFAULT_GLYPH};
use crate::store::Snapshot;

/// Fixed entries of the primary navigation list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavId {
    All,
    Favorites,
    Recents,
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub id: NavId,
    pub title: &'static str,
    pub glyph: Glyph,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        id: NavId::All,
        title: "All Locations",
        glyph: DEFAULT_GLYPH,
        href: route::ALL,
    },
    NavItem {
        id: NavId::Favorites,
        title: "Favorites",
        glyph: FAVORITE_GLYPH,
        href: route::FAVORITES,
    },
    NavItem {
        id: NavId::Recents,
        title: "Recents",
        glyph: RECENT_GLYPH,
        href: route::RECENTS,
    },
];

/// Label used for the category list's catch-all entry
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// One row of the primary navigation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: NavId,
    pub title: &'static str,
    pub href: &'static str,
    pub glyph: Glyph,
    pub count: usize,
    pub is_active: bool,
    pub show_badge: bool,
}

impl NavEntry {
    /// Count to draw next to the title, if any
    pub fn badge(&self) -> Option<usize> {
        self.show_badge.then_some(self.count)
    }
}

/// One row of the category list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub id: CategoryFilter,
    pub name: String,
    pub count: usize,
    pub is_selected: bool,
    pub icon_key: String,
    pub glyph: Glyph,
    /// Accent color as stored on the category; empty for the "All" entry
    pub color: String,
    pub show_badge: bool,
}

impl CategoryEntry {
    pub fn badge(&self) -> Option<usize> {
        self.show_badge.then_some(self.count)
    }
}

pub fn build_primary_nav(current_route: &str, snapshot: &Snapshot<'_>) -> Vec<NavEntry> {
    NAV_ITEMS
        .iter()
        .map(|item| {
            let count = match item.id {
                NavId::All => snapshot.count_by_category(&CategoryFilter::All),
                NavId::Favorites => snapshot.favorite_count(),
                NavId::Recents => snapshot.recent_count(),
            };
            // "All Locations" keeps its badge at zero, the others hide it
            let show_badge = match item.id {
                NavId::All => true,
                NavId::Favorites | NavId::Recents => count > 0,
            };
            NavEntry {
                id: item.id,
                title: item.title,
                href: item.href,
                glyph: item.glyph,
                count,
                is_active: current_route == item.href,
                show_badge,
            }
        })
        .collect()
}

pub fn build_category_nav(snapshot: &Snapshot<'_>) -> Vec<CategoryEntry> {
    let selected = snapshot.selected_category();
    let mut entries = Vec::with_capacity(snapshot.categories().len() + 1);

    entries.push(CategoryEntry {
        id: CategoryFilter::All,
        name: ALL_CATEGORIES_LABEL.to_string(),
        count: snapshot.count_by_category(&CategoryFilter::All),
        is_selected: *selected == CategoryFilter::All,
        icon_key: String::new(),
        glyph: DEFAULT_GLYPH,
        color: String::new(),
        show_badge: true,
    });

    for category in snapshot.categories() {
        let id = CategoryFilter::Category(category.id.clone());
        let count = snapshot.count_by_category(&id);
        entries.push(CategoryEntry {
            is_selected: *selected == id,
            id,
            name: category.name.clone(),
            count,
            icon_key: category.icon.clone(),
            glyph: glyph_for(&category.icon),
            color: category.color.clone(),
            show_badge: count > 0,
        });
    }

    entries
}

/// Both sidebar lists, tagged with the inputs they were derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarModel {
    pub revision: u64,
    pub route: String,
    pub primary: Vec<NavEntry>,
    pub categories: Vec<CategoryEntry>,
}

impl SidebarModel {
    pub fn build(current_route: &str, snapshot: &Snapshot<'_>) -> Self {
        Self {
            revision: snapshot.revision(),
            route: current_route.to_string(),
            primary: build_primary_nav(current_route, snapshot),
            categories: build_category_nav(snapshot),
        }
    }

    /// Whether the model must be rebuilt for this route and store revision
    pub fn is_stale(&self, current_route: &str, revision: u64) -> bool {
        self.revision != revision || self.route != current_route
    }

    pub fn active_primary_index(&self) -> Option<usize> {
        self.primary.iter().position(|entry| entry.is_active)
    }

    pub fn selected_category_index(&self) -> Option<usize> {
        self.categories.iter().position(|entry| entry.is_selected)
    }
}
