//! JSON seed files
//!
//! ```json
//! {
//!   "categories": [{ "id": "parks", "name": "Parks", "icon": "trees", "color": "#16a34a" }],
//!   "locations": [{ "id": "1", "name": "Pier 7", "category_id": "parks", "is_favorite": true }]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::LocationStore;
use crate::domain::{Category, Location};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub locations: Vec<Location>,
}

pub fn load(path: &Path) -> Result<LocationStore> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read seed file {}", path.display()))?;
    let store = from_str(&content).with_context(|| format!("load seed file {}", path.display()))?;
    log::info!(
        "loaded {} locations in {} categories from {}",
        store.get_all().len(),
        store.categories().len(),
        path.display()
    );
    Ok(store)
}

pub fn from_str(content: &str) -> Result<LocationStore> {
    let seed: SeedFile = serde_json::from_str(content).context("parse seed json")?;
    Ok(LocationStore::new(seed.categories, seed.locations)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryFilter;

    #[test]
    fn test_from_str() {
        let json = r##"{
            "categories": [
                { "id": "parks", "name": "Parks", "icon": "trees", "color": "#16a34a" }
            ],
            "locations": [
                { "id": "1", "name": "Pier 7", "category_id": "parks", "is_favorite": true },
                { "id": "2", "name": "Old Mill", "category_id": "mills",
                  "last_viewed_at": "2024-05-01T12:00:00Z" }
            ]
        }"##;
        let store = from_str(json).unwrap();
        assert_eq!(store.count_by_category(&CategoryFilter::All), 2);
        assert_eq!(store.count_by_category(&CategoryFilter::category("parks")), 1);
        assert_eq!(store.snapshot().count_uncategorized(), 1);
        assert_eq!(store.get_recent_locations().len(), 1);
    }

    #[test]
    fn test_from_str_rejects_duplicates() {
        let json = r#"{
            "locations": [
                { "id": "1", "name": "A", "category_id": "x" },
                { "id": "1", "name": "B", "category_id": "x" }
            ]
        }"#;
        let err = from_str(json).unwrap_err();
        assert!(err.to_string().contains("duplicate location id"));
    }

    #[test]
    fn test_from_str_rejects_bad_json() {
        assert!(from_str("{ not json").is_err());
    }
}
