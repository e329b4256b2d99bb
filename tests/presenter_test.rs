//! Sidebar derivation: active route, selected category, badge counts

use chrono::{TimeZone, Utc};

use waypoint::domain::{Category, CategoryFilter, Location, DEFAULT_GLYPH};
use waypoint::nav::{build_category_nav, build_primary_nav, route, NavId};
use waypoint::store::LocationStore;

fn store() -> LocationStore {
    let viewed = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    LocationStore::new(
        vec![
            Category::new("food", "Food", "utensils", "#f97316"),
            Category::new("park", "Parks", "trees", "#22c55e"),
            Category::new("museum", "Museums", "landmark", "#7c3aed"),
        ],
        vec![
            Location::new("1", "Noodle Bar", "food").favorite(true),
            Location::new("2", "Taco Stand", "food").viewed_at(viewed),
            Location::new("3", "Riverside", "park").favorite(true),
        ],
    )
    .unwrap()
}

fn active_ids(current_route: &str, store: &LocationStore) -> Vec<NavId> {
    build_primary_nav(current_route, &store.snapshot())
        .into_iter()
        .filter(|entry| entry.is_active)
        .map(|entry| entry.id)
        .collect()
}

#[test]
fn test_primary_nav_shape() {
    let store = store();
    let primary = build_primary_nav(route::ALL, &store.snapshot());
    let summary: Vec<(&str, &str, usize)> = primary
        .iter()
        .map(|entry| (entry.title, entry.href, entry.count))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("All Locations", "/", 3),
            ("Favorites", "/favorites", 2),
            ("Recents", "/recents", 1),
        ]
    );
}

#[test]
fn test_favorites_route_activates_only_favorites() {
    let store = store();
    assert_eq!(active_ids("/favorites", &store), vec![NavId::Favorites]);
    assert_eq!(active_ids("/", &store), vec![NavId::All]);
    assert_eq!(active_ids("/recents", &store), vec![NavId::Recents]);
}

#[test]
fn test_route_match_is_exact() {
    let store = store();
    for path in ["/favorites/", "/favorites/1", "favorites", "", "/Recents", "/all"] {
        assert!(active_ids(path, &store).is_empty(), "{path:?}");
    }
}

#[test]
fn test_initial_category_nav_selects_all() {
    let store = store();
    let entries = build_category_nav(&store.snapshot());
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].id, CategoryFilter::All);
    assert_eq!(entries[0].name, "All");
    assert!(entries[0].is_selected);
    assert!(entries[1..].iter().all(|entry| !entry.is_selected));
}

#[test]
fn test_select_park_marks_only_park() {
    let mut store = store();
    store.set_selected_category(CategoryFilter::category("park"));
    let entries = build_category_nav(&store.snapshot());

    let selected: Vec<&str> = entries
        .iter()
        .filter(|entry| entry.is_selected)
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(selected, vec!["park"]);

    let park = entries.iter().find(|e| e.id.as_str() == "park").unwrap();
    assert_eq!(park.count, 1);
    let food = entries.iter().find(|e| e.id.as_str() == "food").unwrap();
    assert!(!food.is_selected);
}

#[test]
fn test_unknown_selection_keeps_nav_unchanged() {
    let mut store = store();
    let before = build_category_nav(&store.snapshot());
    store.set_selected_category(CategoryFilter::category("nonexistent-id"));
    assert_eq!(build_category_nav(&store.snapshot()), before);
}

#[test]
fn test_category_counts_and_badges() {
    let store = store();
    let entries = build_category_nav(&store.snapshot());
    let summary: Vec<(&str, usize, Option<usize>)> = entries
        .iter()
        .map(|entry| (entry.id.as_str(), entry.count, entry.badge()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("all", 3, Some(3)),
            ("food", 2, Some(2)),
            ("park", 1, Some(1)),
            ("museum", 0, None),
        ]
    );
}

#[test]
fn test_primary_badges_on_empty_store() {
    let store = LocationStore::new(Vec::new(), Vec::new()).unwrap();
    let primary = build_primary_nav(route::RECENTS, &store.snapshot());
    let badges: Vec<Option<usize>> = primary.iter().map(|entry| entry.badge()).collect();
    assert_eq!(badges, vec![Some(0), None, None]);

    let categories = build_category_nav(&store.snapshot());
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].badge(), Some(0));
}

#[test]
fn test_icons_resolve_with_fallback() {
    let store = LocationStore::new(
        vec![
            Category::new("cafe", "Cafes", "coffee", "#a16207"),
            Category::new("misc", "Misc", "not-an-icon", ""),
        ],
        Vec::new(),
    )
    .unwrap();
    let entries = build_category_nav(&store.snapshot());
    assert_eq!(entries[1].icon_key, "coffee");
    assert_ne!(entries[1].glyph, DEFAULT_GLYPH);
    assert_eq!(entries[2].glyph, DEFAULT_GLYPH);
    // deterministic across rebuilds
    assert_eq!(build_category_nav(&store.snapshot())[2].glyph, DEFAULT_GLYPH);
}
