pub mod config;
pub mod paths;

pub use config::{BrowseConfig, Config, LoggingConfig, TmdbConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_IMAGE_BASE_URL};
pub use paths::{home_override, PathManager};
