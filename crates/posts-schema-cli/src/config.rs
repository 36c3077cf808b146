use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fallback database file when neither the flag nor the config names one.
const DEFAULT_DATABASE: &str = "posts.db";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Path to the SQLite database file.
    pub database: Option<PathBuf>,
}

/// Config file path: `~/.config/posts-setup/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("posts-setup").join("config.toml"))
}

/// Load config from file, falling back to defaults if missing.
pub fn load_config() -> AppConfig {
    if let Some(path) = config_path()
        && let Ok(contents) = std::fs::read_to_string(&path)
    {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            return config;
        }
        eprintln!(
            "warning: failed to parse config at {}, using defaults",
            path.display()
        );
    }

    AppConfig::default()
}

/// Pick the database path: explicit flag first, then the config file,
/// then `posts.db` in the working directory.
pub fn resolve_database(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.or_else(|| config.database.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_database_path_from_toml() {
        let config: AppConfig = toml::from_str(r#"database = "/var/lib/news/posts.db""#).unwrap();
        assert_eq!(
            config.database.as_deref(),
            Some(std::path::Path::new("/var/lib/news/posts.db"))
        );
    }

    #[test]
    fn empty_config_has_no_database() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.database.is_none());
    }

    #[test]
    fn flag_overrides_config() {
        let config = AppConfig {
            database: Some(PathBuf::from("from-config.db")),
        };
        let resolved = resolve_database(Some(PathBuf::from("from-flag.db")), &config);
        assert_eq!(resolved, PathBuf::from("from-flag.db"));
    }

    #[test]
    fn config_used_when_no_flag() {
        let config = AppConfig {
            database: Some(PathBuf::from("from-config.db")),
        };
        assert_eq!(
            resolve_database(None, &config),
            PathBuf::from("from-config.db")
        );
    }

    #[test]
    fn default_used_when_nothing_is_set() {
        assert_eq!(
            resolve_database(None, &AppConfig::default()),
            PathBuf::from("posts.db")
        );
    }
}
