//! Category icon registry
//!
//! Maps the symbolic icon key stored on a category to the glyph drawn in the
//! terminal. Unknown keys resolve to [`DEFAULT_GLYPH`].

/// A single-cell symbol used in place of an icon
pub type Glyph = &'static str;

/// Glyph for the generic location marker, also the fallback
pub const DEFAULT_GLYPH: Glyph = "◉";

pub const FAVORITE_GLYPH: Glyph = "♥";
pub const RECENT_GLYPH: Glyph = "◷";

const ICONS: [(&str, Glyph); 8] = [
    ("utensils", "🍴"),
    ("coffee", "☕"),
    ("wine", "🍷"),
    ("trees", "🌳"),
    ("landmark", "🏛"),
    ("shopping-bag", "🛍"),
    ("bed", "🛏"),
    ("dumbbell", "🏋"),
];

/// Resolve an icon key; never fails
pub fn glyph_for(key: &str) -> Glyph {
    ICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(DEFAULT_GLYPH)
}

/// Whether the registry has a dedicated glyph for `key`
pub fn is_known(key: &str) -> bool {
    ICONS.iter().any(|(name, _)| *name == key)
}
