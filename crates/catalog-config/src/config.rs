use catalog_models::{SortKey, TimeWindow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "TMDB_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the metadata service. Built once at startup and
/// handed to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// Overridden by the `TMDB_API_KEY` environment variable when that is set.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Sent as TMDB's `language` parameter, e.g. "en-US".
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    #[serde(default)]
    pub default_sort: SortKey,
    #[serde(default)]
    pub time_window: TimeWindow,
    /// Drop the selected genre when the media type changes. Off keeps the
    /// selection as-is, even if the new type has no such genre.
    #[serde(default)]
    pub clear_genre_on_media_change: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            language: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::default(),
            time_window: TimeWindow::default(),
            clear_genre_on_media_change: false,
        }
    }
}

impl TmdbConfig {
    /// API key from the environment, falling back to the config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(std::env::var(API_KEY_ENV).ok())
    }

    pub fn resolve_api_key_with(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.trim().is_empty()))
            .map(|k| k.trim().to_string())
    }

    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.as_deref().unwrap_or_default().chars().collect();
        match chars.len() {
            0 => "(not set)".to_string(),
            n if n > 4 => format!("{}{}", "*".repeat(n - 4), chars[n - 4..].iter().collect::<String>()),
            n => "*".repeat(n),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists; otherwise every setting takes its default.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [("base_url", &self.tmdb.base_url), ("image_base_url", &self.tmdb.image_base_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow::anyhow!("tmdb.{} must be an http(s) URL, got '{}'", name, url));
            }
        }

        if self.tmdb.timeout_secs == 0 {
            return Err(anyhow::anyhow!("tmdb.timeout_secs must be greater than zero"));
        }

        if let Some(language) = &self.tmdb.language {
            if language.trim().is_empty() {
                return Err(anyhow::anyhow!("tmdb.language cannot be empty when set"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            tmdb: TmdbConfig {
                api_key: Some("test_key".to_string()),
                language: Some("en-US".to_string()),
                ..TmdbConfig::default()
            },
            browse: BrowseConfig {
                default_sort: SortKey::TitleAsc,
                time_window: TimeWindow::Day,
                clear_genre_on_media_change: true,
            },
            logging: LoggingConfig::default(),
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.tmdb.api_key.as_deref(), Some("test_key"));
        assert_eq!(loaded.tmdb.base_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.browse.default_sort, SortKey::TitleAsc);
        assert_eq!(loaded.browse.time_window, TimeWindow::Day);
        assert!(loaded.browse.clear_genre_on_media_change);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[browse]\ndefault_sort = \"vote_average.desc\"\n").unwrap();
        assert_eq!(config.browse.default_sort, SortKey::VoteAverageDesc);
        assert_eq!(config.browse.time_window, TimeWindow::Week);
        assert_eq!(config.tmdb.timeout_secs, 30);
        assert!(config.tmdb.api_key.is_none());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.tmdb.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.tmdb.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.tmdb.base_url = DEFAULT_BASE_URL.to_string();
        config.tmdb.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_key_wins_over_file() {
        let tmdb = TmdbConfig {
            api_key: Some("from_file".to_string()),
            ..TmdbConfig::default()
        };
        assert_eq!(tmdb.resolve_api_key_with(Some("from_env".to_string())).as_deref(), Some("from_env"));
        assert_eq!(tmdb.resolve_api_key_with(Some("  ".to_string())).as_deref(), Some("from_file"));
        assert_eq!(TmdbConfig::default().resolve_api_key_with(None), None);
    }

    #[test]
    fn test_masked_api_key() {
        let tmdb = TmdbConfig {
            api_key: Some("abcdef123456".to_string()),
            ..TmdbConfig::default()
        };
        assert_eq!(tmdb.masked_api_key(), "********3456");
        assert_eq!(TmdbConfig::default().masked_api_key(), "(not set)");
    }
}
