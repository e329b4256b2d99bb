use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Textual form of [`CategoryFilter::All`]
pub const ALL_SENTINEL: &str = "all";

/// Stable identifier of a location record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a category record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A saved point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub category_id: CategoryId,
    #[serde(default)]
    pub is_favorite: bool,
    /// `None` until the location has been opened at least once
    #[serde(default)]
    pub last_viewed_at: Option<DateTime<Utc>>,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            id: LocationId::new(id),
            name: name.into(),
            address: String::new(),
            latitude: None,
            longitude: None,
            category_id: CategoryId::new(category_id),
            is_favorite: false,
            last_viewed_at: None,
        }
    }

    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn viewed_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_viewed_at = Some(at);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

/// A classification for locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Key into the icon registry, see [`crate::domain::glyph_for`]
    pub icon: String,
    /// Accent color as `#rrggbb`
    #[serde(default)]
    pub color: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// Active category filter: every location, or one category
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(CategoryId),
}

impl CategoryFilter {
    /// Parse the textual form; `"all"` maps to [`CategoryFilter::All`]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(CategoryId::new(trimmed))
        }
    }

    pub fn category(id: impl Into<String>) -> Self {
        CategoryFilter::Category(CategoryId::new(id))
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_SENTINEL,
            CategoryFilter::Category(id) => id.as_str(),
        }
    }

    pub fn matches(&self, location: &Location) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => location.category_id == *id,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(" ALL "), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("parks"), CategoryFilter::category("parks"));
    }

    #[test]
    fn test_filter_matches() {
        let cafe = Location::new("1", "Blue Door", "cafes");
        assert!(CategoryFilter::All.matches(&cafe));
        assert!(CategoryFilter::category("cafes").matches(&cafe));
        assert!(!CategoryFilter::category("parks").matches(&cafe));
    }

    #[test]
    fn test_location_deserialize_defaults() {
        let json = r#"{"id":"7","name":"Pier","category_id":"parks"}"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.id.as_str(), "7");
        assert!(!location.is_favorite);
        assert!(location.last_viewed_at.is_none());
        assert!(location.address.is_empty());
    }
}
