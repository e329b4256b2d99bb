//! Location store - single source of truth for locations and the category filter
//!
//! Reads go through [`Snapshot`], a borrowed view of the store. Because the
//! snapshot borrows the store, a consumer can never observe a half-applied
//! mutation. Mutations bump [`LocationStore::revision`] and queue a
//! [`StoreEvent`] so the UI knows when derived values must be rebuilt.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::StoreError;
use crate::domain::{
    icons, Category, CategoryFilter, CategoryId, Location, LocationId, ALL_SENTINEL,
};

/// Number of entries kept in the recents list unless configured otherwise
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// A change applied to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    SelectionChanged(CategoryFilter),
    FavoriteToggled { id: LocationId, is_favorite: bool },
    Viewed(LocationId),
}

/// Which base list a view draws from before the category filter is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    All,
    Favorites,
    Recents,
}

#[derive(Debug, Clone)]
pub struct LocationStore {
    categories: Vec<Category>,
    locations: Vec<Location>,
    selected: CategoryFilter,
    recent_limit: usize,
    revision: u64,
    changes: Vec<StoreEvent>,
}

impl LocationStore {
    /// Build a store, validating id uniqueness.
    ///
    /// Locations pointing at an unknown category are accepted and treated as
    /// uncategorized.
    pub fn new(categories: Vec<Category>, locations: Vec<Location>) -> Result<Self, StoreError> {
        let mut category_ids = BTreeSet::new();
        for category in &categories {
            if category.id.as_str().eq_ignore_ascii_case(ALL_SENTINEL) {
                return Err(StoreError::ReservedCategoryId(category.id.clone()));
            }
            if !category_ids.insert(&category.id) {
                return Err(StoreError::DuplicateCategory(category.id.clone()));
            }
            if !icons::is_known(&category.icon) {
                log::debug!("category {} uses unknown icon `{}`", category.id, category.icon);
            }
        }

        let mut location_ids = BTreeSet::new();
        for location in &locations {
            if !location_ids.insert(&location.id) {
                return Err(StoreError::DuplicateLocation(location.id.clone()));
            }
            if !category_ids.contains(&location.category_id) {
                log::warn!(
                    "location {} references unknown category `{}`, treating as uncategorized",
                    location.id,
                    location.category_id
                );
            }
        }

        Ok(Self {
            categories,
            locations,
            selected: CategoryFilter::All,
            recent_limit: DEFAULT_RECENT_LIMIT,
            revision: 0,
            changes: Vec::new(),
        })
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Borrowed read-only view for derived queries
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            categories: &self.categories,
            locations: &self.locations,
            selected: &self.selected,
            recent_limit: self.recent_limit,
            revision: self.revision,
        }
    }

    /// Monotonic counter, bumped by every mutation that changed state
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drain the events queued since the last call
    pub fn take_changes(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.changes)
    }

    // === Queries ===

    pub fn get_all(&self) -> &[Location] {
        &self.locations
    }

    pub fn get_favorites(&self) -> Vec<&Location> {
        self.snapshot().get_favorites()
    }

    pub fn get_recent_locations(&self) -> Vec<&Location> {
        self.snapshot().get_recent_locations()
    }

    pub fn count_by_category(&self, filter: &CategoryFilter) -> usize {
        self.snapshot().count_by_category(filter)
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    // === Mutations ===

    /// Change the category filter.
    ///
    /// Returns `false` and keeps the current selection when `filter` names a
    /// category that does not exist. Re-selecting the current filter is
    /// accepted but changes nothing.
    pub fn set_selected_category(&mut self, filter: CategoryFilter) -> bool {
        if let CategoryFilter::Category(id) = &filter {
            if !self.snapshot().is_known_category(id) {
                log::warn!("ignoring selection of unknown category `{id}`");
                return false;
            }
        }
        if self.selected == filter {
            return true;
        }
        log::debug!("category filter {} -> {}", self.selected, filter);
        self.selected = filter.clone();
        self.commit(StoreEvent::SelectionChanged(filter));
        true
    }

    /// Flip the favorite flag, returning the new value
    pub fn toggle_favorite(&mut self, id: &LocationId) -> Result<bool, StoreError> {
        let location = self.location_mut(id)?;
        location.is_favorite = !location.is_favorite;
        let is_favorite = location.is_favorite;
        log::debug!("location {id} favorite={is_favorite}");
        self.commit(StoreEvent::FavoriteToggled {
            id: id.clone(),
            is_favorite,
        });
        Ok(is_favorite)
    }

    /// Record that a location was opened at `at`
    pub fn mark_viewed(&mut self, id: &LocationId, at: DateTime<Utc>) -> Result<(), StoreError> {
        let location = self.location_mut(id)?;
        if location.last_viewed_at == Some(at) {
            return Ok(());
        }
        location.last_viewed_at = Some(at);
        self.commit(StoreEvent::Viewed(id.clone()));
        Ok(())
    }

    fn location_mut(&mut self, id: &LocationId) -> Result<&mut Location, StoreError> {
        self.locations
            .iter_mut()
            .find(|location| location.id == *id)
            .ok_or_else(|| StoreError::UnknownLocation(id.clone()))
    }

    fn commit(&mut self, event: StoreEvent) {
        self.revision += 1;
        self.changes.push(event);
    }
}

/// Read-only view over a [`LocationStore`] at one revision
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    categories: &'a [Category],
    locations: &'a [Location],
    selected: &'a CategoryFilter,
    recent_limit: usize,
    revision: u64,
}

impl<'a> Snapshot<'a> {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn categories(&self) -> &'a [Category] {
        self.categories
    }

    pub fn category(&self, id: &CategoryId) -> Option<&'a Category> {
        self.categories.iter().find(|category| category.id == *id)
    }

    pub fn is_known_category(&self, id: &CategoryId) -> bool {
        self.category(id).is_some()
    }

    pub fn location(&self, id: &LocationId) -> Option<&'a Location> {
        self.locations.iter().find(|location| location.id == *id)
    }

    pub fn selected_category(&self) -> &'a CategoryFilter {
        self.selected
    }

    /// Every location in insertion order
    pub fn get_all(&self) -> &'a [Location] {
        self.locations
    }

    pub fn get_favorites(&self) -> Vec<&'a Location> {
        self.locations
            .iter()
            .filter(|location| location.is_favorite)
            .collect()
    }

    /// Viewed locations, newest first, at most `recent_limit` of them.
    /// Locations viewed at the same instant keep their insertion order.
    pub fn get_recent_locations(&self) -> Vec<&'a Location> {
        let mut recent: Vec<&'a Location> = self
            .locations
            .iter()
            .filter(|location| location.last_viewed_at.is_some())
            .collect();
        recent.sort_by(|a, b| b.last_viewed_at.cmp(&a.last_viewed_at));
        recent.truncate(self.recent_limit);
        recent
    }

    pub fn count_by_category(&self, filter: &CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.locations.len(),
            CategoryFilter::Category(id) => self
                .locations
                .iter()
                .filter(|location| location.category_id == *id)
                .count(),
        }
    }

    /// Locations whose category id matches no known category
    pub fn count_uncategorized(&self) -> usize {
        self.locations
            .iter()
            .filter(|location| !self.is_known_category(&location.category_id))
            .count()
    }

    pub fn favorite_count(&self) -> usize {
        self.locations
            .iter()
            .filter(|location| location.is_favorite)
            .count()
    }

    pub fn recent_count(&self) -> usize {
        self.get_recent_locations().len()
    }

    /// Base list for `scope`, narrowed by the selected category
    pub fn visible_locations(&self, scope: ListScope) -> Vec<&'a Location> {
        let base: Vec<&'a Location> = match scope {
            ListScope::All => self.locations.iter().collect(),
            ListScope::Favorites => self.get_favorites(),
            ListScope::Recents => self.get_recent_locations(),
        };
        base.into_iter()
            .filter(|location| self.selected.matches(location))
            .collect()
    }
}
