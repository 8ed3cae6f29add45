pub mod config;
pub mod details;
pub mod gallery;
pub mod genres;
pub mod open;
pub mod prompts;
pub mod search;
pub mod ui;

use catalog_client::{MetadataSource, TmdbClient};
use catalog_config::{Config, PathManager};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::sync::Arc;

/// Paths and configuration resolved once at startup.
pub struct Settings {
    pub paths: PathManager,
    pub config: Config,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let paths = PathManager::default();
        let config_file = paths.config_file();
        let config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
        Ok(Self { paths, config })
    }

    /// Validate the config and build the metadata client. Fails when no API key
    /// is available from the environment or the config file.
    pub fn connect(&self) -> Result<Session> {
        self.config
            .validate()
            .map_err(|e| eyre!("Invalid configuration: {}", e))?;

        let client = Arc::new(TmdbClient::new(&self.config.tmdb).map_err(|e| {
            eyre!(
                "{}\nSet TMDB_API_KEY or run 'reel-catalog config init' to store a key.",
                e
            )
        })?);
        tracing::debug!(base_url = %self.config.tmdb.base_url, "Metadata client ready");

        let source: Arc<dyn MetadataSource> = client.clone();
        Ok(Session { client, source })
    }
}

/// A configured client, shared by the controllers of one command.
pub struct Session {
    pub client: Arc<TmdbClient>,
    pub source: Arc<dyn MetadataSource>,
}
