use crate::error::ClientError;
use async_trait::async_trait;
use catalog_models::{
    Genre, GenreId, MediaDetails, MediaFilter, MediaItem, MediaKey, MediaType, MovieDetails, Page, SortKey,
    TimeWindow, TvShowDetails,
};

/// Parameters for a discover call against one media type.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverParams {
    pub genre: Option<GenreId>,
    pub sort: SortKey,
    pub page: u32,
}

impl Default for DiscoverParams {
    fn default() -> Self {
        Self {
            genre: None,
            sort: SortKey::default(),
            page: 1,
        }
    }
}

/// Read-only access to a movie/TV metadata service.
///
/// Every method issues exactly one request and surfaces the first failure.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    fn source_name(&self) -> &str;

    async fn search_multi(&self, query: &str, page: u32) -> Result<Page<MediaItem>, ClientError>;
    async fn search_movies(&self, query: &str, page: u32) -> Result<Page<MediaItem>, ClientError>;
    async fn search_tv(&self, query: &str, page: u32) -> Result<Page<MediaItem>, ClientError>;

    async fn trending(&self, filter: MediaFilter, window: TimeWindow, page: u32) -> Result<Page<MediaItem>, ClientError>;

    async fn discover(&self, media_type: MediaType, params: &DiscoverParams) -> Result<Page<MediaItem>, ClientError>;

    async fn genres(&self, media_type: MediaType) -> Result<Vec<Genre>, ClientError>;

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, ClientError>;
    async fn tv_details(&self, id: u64) -> Result<TvShowDetails, ClientError>;

    /// Search dispatched on the media filter: `All` uses the multi search.
    async fn search(&self, query: &str, filter: MediaFilter, page: u32) -> Result<Page<MediaItem>, ClientError> {
        match filter {
            MediaFilter::Movie => self.search_movies(query, page).await,
            MediaFilter::Tv => self.search_tv(query, page).await,
            MediaFilter::All => self.search_multi(query, page).await,
        }
    }

    async fn details(&self, key: MediaKey) -> Result<MediaDetails, ClientError> {
        match key.media_type {
            MediaType::Movie => self.movie_details(key.id).await.map(MediaDetails::Movie),
            MediaType::Tv => self.tv_details(key.id).await.map(MediaDetails::Tv),
        }
    }
}
