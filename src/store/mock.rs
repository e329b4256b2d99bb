//! Built-in demo data used when no data file is configured

use chrono::{DateTime, Duration, Utc};

use super::{LocationStore, StoreError};
use crate::domain::{Category, Location};

pub fn categories() -> Vec<Category> {
    vec![
        Category::new("restaurants", "Restaurants", "utensils", "#f97316"),
        Category::new("cafes", "Cafes", "coffee", "#a16207"),
        Category::new("bars", "Bars", "wine", "#be123c"),
        Category::new("parks", "Parks", "trees", "#16a34a"),
        Category::new("museums", "Museums", "landmark", "#7c3aed"),
        Category::new("shopping", "Shopping", "shopping-bag", "#db2777"),
        Category::new("hotels", "Hotels", "bed", "#0284c7"),
        Category::new("fitness", "Fitness", "dumbbell", "#0d9488"),
    ]
}

/// Demo locations; view timestamps are placed shortly before `now`
pub fn locations(now: DateTime<Utc>) -> Vec<Location> {
    vec![
        Location::new("loc-01", "Harbor Noodle House", "restaurants")
            .with_address("12 Wharf St")
            .with_coordinates(37.8078, -122.4177)
            .favorite(true)
            .viewed_at(now - Duration::minutes(12)),
        Location::new("loc-02", "Olive & Ember", "restaurants")
            .with_address("480 Market Ave")
            .with_coordinates(37.7897, -122.4011),
        Location::new("loc-03", "Morning Grind", "cafes")
            .with_address("3 Sutter Ln")
            .with_coordinates(37.7903, -122.4040)
            .favorite(true)
            .viewed_at(now - Duration::hours(2)),
        Location::new("loc-04", "Slow Pour Roasters", "cafes")
            .with_address("77 Valencia St")
            .with_coordinates(37.7689, -122.4220),
        Location::new("loc-05", "The Copper Still", "bars")
            .with_address("901 Mission St")
            .with_coordinates(37.7825, -122.4080)
            .viewed_at(now - Duration::days(1)),
        Location::new("loc-06", "Golden Meadow Park", "parks")
            .with_address("Park Dr")
            .with_coordinates(37.7694, -122.4862)
            .favorite(true),
        Location::new("loc-07", "Bayview Trail", "parks")
            .with_address("Bayview Hill")
            .with_coordinates(37.7170, -122.3920)
            .viewed_at(now - Duration::days(2)),
        Location::new("loc-08", "City Art Museum", "museums")
            .with_address("151 3rd St")
            .with_coordinates(37.7857, -122.4011)
            .favorite(true)
            .viewed_at(now - Duration::days(3)),
        Location::new("loc-09", "Maritime Gallery", "museums")
            .with_address("900 Beach St")
            .with_coordinates(37.8066, -122.4230),
        Location::new("loc-10", "Union Arcade", "shopping")
            .with_address("333 Post St")
            .with_coordinates(37.7880, -122.4075)
            .viewed_at(now - Duration::days(5)),
        Location::new("loc-11", "Hillside Inn", "hotels")
            .with_address("1 Nob Hill Pl")
            .with_coordinates(37.7930, -122.4161),
        Location::new("loc-12", "Ironworks Gym", "fitness")
            .with_address("2200 Bryant St")
            .with_coordinates(37.7596, -122.4100)
            .viewed_at(now - Duration::days(7)),
    ]
}

pub fn seed(now: DateTime<Utc>) -> Result<LocationStore, StoreError> {
    LocationStore::new(categories(), locations(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{glyph_for, CategoryFilter, DEFAULT_GLYPH};

    #[test]
    fn test_seed_is_valid() {
        let store = seed(Utc::now()).unwrap();
        assert_eq!(store.get_all().len(), 12);
        assert_eq!(store.snapshot().count_uncategorized(), 0);
        assert_eq!(store.get_favorites().len(), 4);
        assert_eq!(store.get_recent_locations().len(), 5);
    }

    #[test]
    fn test_every_category_has_icon_and_location() {
        let store = seed(Utc::now()).unwrap();
        for category in store.categories() {
            assert_ne!(glyph_for(&category.icon), DEFAULT_GLYPH, "{}", category.id);
            assert!(store.count_by_category(&CategoryFilter::Category(category.id.clone())) > 0);
        }
    }
}
