use crate::error::ClientError;
use crate::tmdb::api::{self, GenreList, StatusBody};
use crate::traits::{DiscoverParams, MetadataSource};
use async_trait::async_trait;
use catalog_config::TmdbConfig;
use catalog_models::{
    Genre, MediaFilter, MediaItem, MediaType, MovieDetails, Page, TimeWindow, TvShowDetails,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
pub struct TmdbClient {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
    image_base_url: String,
    language: Option<String>,
}

impl TmdbClient {
    /// Build a client from configuration, resolving the API key from the
    /// environment first and the config file second.
    pub fn new(config: &TmdbConfig) -> Result<Self, ClientError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            ClientError::Config(format!(
                "No TMDB API key configured. Set {} or tmdb.api_key in the config file",
                catalog_config::API_KEY_ENV
            ))
        })?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: &TmdbConfig, api_key: String) -> Result<Self, ClientError> {
        if api_key.trim().is_empty() {
            return Err(ClientError::Config("TMDB API key cannot be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client: Arc::new(client),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.clone(),
            language: config.language.clone(),
        })
    }

    pub fn image_url(&self, path: Option<&str>, size: &str) -> Option<String> {
        api::image_url(&self.image_base_url, path, size)
    }

    /// GET `path` with the API key (and language, if configured) plus `params`.
    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let mut query: Vec<(&str, String)> = Vec::with_capacity(params.len() + 2);
        query.push(("api_key", self.api_key.clone()));
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }
        query.extend(params.iter().cloned());

        debug!(
            endpoint = path,
            params = ?params,
            "TMDB request"
        );

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|source| ClientError::Network {
                endpoint: path.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ClientError::Network {
            endpoint: path.to_string(),
            source,
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<StatusBody>(&body)
                .ok()
                .and_then(|b| b.status_message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(ClientError::api(path, status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_typed_page(
        &self,
        media_type: MediaType,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Page<MediaItem>, ClientError> {
        let page: Page<Value> = self.get(path, params).await?;
        Ok(filter_page(page, |value| api::decode_typed(media_type, value)))
    }

    async fn get_mixed_page(&self, path: &str, params: &[(&str, String)]) -> Result<Page<MediaItem>, ClientError> {
        let page: Page<Value> = self.get(path, params).await?;
        Ok(filter_page(page, api::decode_mixed))
    }
}

fn filter_page(page: Page<Value>, decode: impl FnMut(Value) -> Option<MediaItem>) -> Page<MediaItem> {
    Page {
        page: page.page,
        results: page.results.into_iter().filter_map(decode).collect(),
        total_pages: page.total_pages,
        total_results: page.total_results,
    }
}

fn search_params(query: &str, page: u32) -> Vec<(&'static str, String)> {
    vec![("query", query.to_string()), ("page", page.max(1).to_string())]
}

#[async_trait]
impl MetadataSource for TmdbClient {
    fn source_name(&self) -> &str {
        "tmdb"
    }

    async fn search_multi(&self, query: &str, page: u32) -> Result<Page<MediaItem>, ClientError> {
        self.get_mixed_page(api::search_path(MediaFilter::All), &search_params(query, page))
            .await
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<Page<MediaItem>, ClientError> {
        self.get_typed_page(MediaType::Movie, api::search_path(MediaFilter::Movie), &search_params(query, page))
            .await
    }

    async fn search_tv(&self, query: &str, page: u32) -> Result<Page<MediaItem>, ClientError> {
        self.get_typed_page(MediaType::Tv, api::search_path(MediaFilter::Tv), &search_params(query, page))
            .await
    }

    async fn trending(&self, filter: MediaFilter, window: TimeWindow, page: u32) -> Result<Page<MediaItem>, ClientError> {
        let path = api::trending_path(filter, window);
        let params = [("page", page.max(1).to_string())];
        match filter.media_type() {
            Some(media_type) => self.get_typed_page(media_type, &path, &params).await,
            None => self.get_mixed_page(&path, &params).await,
        }
    }

    async fn discover(&self, media_type: MediaType, params: &DiscoverParams) -> Result<Page<MediaItem>, ClientError> {
        let mut query = vec![
            ("page", params.page.max(1).to_string()),
            ("sort_by", params.sort.as_str().to_string()),
        ];
        if let Some(genre) = params.genre {
            query.push(("with_genres", genre.to_string()));
        }
        self.get_typed_page(media_type, &api::discover_path(media_type), &query)
            .await
    }

    async fn genres(&self, media_type: MediaType) -> Result<Vec<Genre>, ClientError> {
        let list: GenreList = self.get(&api::genre_path(media_type), &[]).await?;
        Ok(list.genres)
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, ClientError> {
        self.get(&api::details_path(MediaType::Movie, id), &[]).await
    }

    async fn tv_details(&self, id: u64) -> Result<TvShowDetails, ClientError> {
        self.get(&api::details_path(MediaType::Tv, id), &[]).await
    }
}
