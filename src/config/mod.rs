use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::nav::route;
use crate::store::DEFAULT_RECENT_LIMIT;

/// Identity shown in the sidebar footer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            avatar_url: None,
        }
    }
}

impl UserProfile {
    /// Single-letter fallback used when there is no avatar
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Maximum number of entries in the recents list
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// JSON seed file; the built-in demo data is used when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_start_route")]
    pub start_route: String,

    #[serde(default)]
    pub user: UserProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            data_file: None,
            start_route: default_start_route(),
            user: UserProfile::default(),
        }
    }
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_start_route() -> String {
    route::ALL.to_string()
}

/// Read `path`, falling back to defaults when it is missing or malformed
pub fn load_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    parse(&content).unwrap_or_else(|err| {
        log::warn!("ignoring malformed config {}: {err}", path.display());
        Config::default()
    })
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("WAYPOINT_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("waypoint").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("waypoint").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "waypoint", "waypoint")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("waypoint"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("waypoint"));
    }
    directories::ProjectDirs::from("io", "waypoint", "waypoint")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("waypoint.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);
        assert_eq!(config.start_route, "/");
        assert!(config.data_file.is_none());
        assert_eq!(config.user.name, "Guest");
    }

    #[test]
    fn test_parse_full() {
        let config = parse(
            r#"
            recent_limit = 3
            data_file = "/tmp/places.json"
            start_route = "/favorites"

            [user]
            name = "ada"
            email = "ada@example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.recent_limit, 3);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/places.json")));
        assert_eq!(config.start_route, "/favorites");
        assert_eq!(config.user.initial(), "A");
        assert!(config.user.avatar_url.is_none());
    }

    #[test]
    fn test_partial_user_table_keeps_other_settings() {
        let config = parse(
            r#"
            recent_limit = 2
            data_file = "/tmp/x.json"

            [user]
            name = "Ada"
            "#,
        )
        .unwrap();
        assert_eq!(config.recent_limit, 2);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/x.json")));
        assert_eq!(config.user.name, "Ada");
        assert_eq!(config.user.email, UserProfile::default().email);
    }

    #[test]
    fn test_load_from_partial_user_table() {
        let path = std::env::temp_dir().join(format!("waypoint-config-{}.toml", std::process::id()));
        fs::write(&path, "recent_limit = 2\n\n[user]\nname = \"Ada\"\n").unwrap();
        let config = load_from(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(config.recent_limit, 2);
        assert_eq!(config.user.name, "Ada");
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(parse("recent_limit = \"many\"").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let config = load_from(Path::new("/nonexistent/waypoint/config.toml"));
        assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);
    }

    #[test]
    fn test_initial_of_blank_name() {
        let user = UserProfile {
            name: "  ".to_string(),
            ..UserProfile::default()
        };
        assert_eq!(user.initial(), "?");
    }
}
