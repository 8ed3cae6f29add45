use crate::aggregate::merge_discover;
use crate::filter::FilterState;
use crate::navigation::NavigationContext;
use crate::request::{RequestToken, RequestTracker};
use crate::sort::sort_items;
use crate::view::LoadState;
use catalog_client::{ClientError, DiscoverParams, MetadataSource};
use catalog_config::BrowseConfig;
use catalog_models::{GenreId, MediaFilter, MediaItem, MediaKey, MediaType, SortKey, TimeWindow};
use std::sync::Arc;
use tracing::{error, info, warn};

pub const GALLERY_ERROR: &str = "Failed to load trending items. Please try again.";

/// Inputs captured when a gallery fetch is issued.
#[derive(Debug, Clone)]
pub struct GalleryRequest {
    pub token: RequestToken,
    pub genre: Option<GenreId>,
    pub media: MediaFilter,
    pub sort: SortKey,
    pub window: TimeWindow,
}

#[derive(Debug)]
pub struct GalleryResponse {
    pub token: RequestToken,
    pub genre: Option<GenreId>,
    pub media: MediaFilter,
    pub sort: SortKey,
    pub result: Result<Vec<MediaItem>, ClientError>,
}

impl GalleryRequest {
    /// Discover when a genre is selected (both types joined for `All`), trending otherwise.
    pub async fn execute(self, source: &dyn MetadataSource) -> GalleryResponse {
        let result = self.fetch(source).await;
        GalleryResponse {
            token: self.token,
            genre: self.genre,
            media: self.media,
            sort: self.sort,
            result,
        }
    }

    async fn fetch(&self, source: &dyn MetadataSource) -> Result<Vec<MediaItem>, ClientError> {
        let Some(genre) = self.genre else {
            let page = source.trending(self.media, self.window, 1).await?;
            return Ok(page.results);
        };

        let params = DiscoverParams {
            genre: Some(genre),
            sort: self.sort,
            page: 1,
        };

        match self.media.media_type() {
            Some(media_type) => Ok(source.discover(media_type, &params).await?.results),
            None => {
                let (movies, shows) = futures::try_join!(
                    source.discover(MediaType::Movie, &params),
                    source.discover(MediaType::Tv, &params),
                )
                .map_err(|e| ClientError::combined("Combined discover", e))?;
                Ok(merge_discover(Some(movies), Some(shows)))
            }
        }
    }
}

/// Trending/discover grid with genre, media-type and sort controls.
pub struct GalleryController {
    source: Arc<dyn MetadataSource>,
    filters: FilterState,
    sort: SortKey,
    window: TimeWindow,
    state: LoadState<Vec<MediaItem>>,
    tracker: RequestTracker,
}

impl GalleryController {
    pub fn new(source: Arc<dyn MetadataSource>) -> Self {
        Self {
            source,
            filters: FilterState::new(),
            sort: SortKey::default(),
            window: TimeWindow::default(),
            state: LoadState::Idle,
            tracker: RequestTracker::new(),
        }
    }

    pub fn with_config(source: Arc<dyn MetadataSource>, config: &BrowseConfig) -> Self {
        let mut controller = Self::new(source);
        controller.filters = FilterState::new().with_clear_genre_on_media_change(config.clear_genre_on_media_change);
        controller.sort = config.default_sort;
        controller.window = config.time_window;
        controller
    }

    pub fn state(&self) -> &LoadState<Vec<MediaItem>> {
        &self.state
    }

    pub fn items(&self) -> &[MediaItem] {
        self.state.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn set_genre(&mut self, genre: Option<GenreId>) {
        self.filters.set_genre(genre);
    }

    pub fn set_media(&mut self, media: MediaFilter) {
        self.filters.set_media(media);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    pub fn set_window(&mut self, window: TimeWindow) {
        self.window = window;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Fetch both genre lists for the filter menu. Failure leaves the lists empty.
    pub async fn load_genres(&mut self) -> Result<(), ClientError> {
        let source = Arc::clone(&self.source);
        self.filters.load(source.as_ref()).await
    }

    pub fn title(&self) -> &'static str {
        match (self.filters.genre(), self.filters.media()) {
            (Some(_), MediaFilter::Movie) => "Trending Movies by Genre",
            (Some(_), MediaFilter::Tv) => "Trending TV Shows by Genre",
            (Some(_), MediaFilter::All) => "Trending by Genre",
            (None, MediaFilter::Movie) => "Trending Movies",
            (None, MediaFilter::Tv) => "Trending TV Shows",
            (None, MediaFilter::All) => "Trending",
        }
    }

    /// Snapshot the current inputs under a fresh token and enter `Loading`.
    pub fn begin(&mut self) -> GalleryRequest {
        self.state = LoadState::Loading;
        GalleryRequest {
            token: self.tracker.issue(),
            genre: self.filters.genre(),
            media: self.filters.media(),
            sort: self.sort,
            window: self.window,
        }
    }

    /// Apply a finished fetch. Returns `false` if a newer request has been issued since.
    pub fn apply(&mut self, response: GalleryResponse) -> bool {
        if !self.tracker.is_current(response.token) {
            info!(token = response.token.value(), "Discarding stale gallery response");
            return false;
        }

        self.state = match response.result {
            Ok(items) if items.is_empty() => {
                warn!(
                    genre = ?response.genre,
                    media = %response.media,
                    sort = %response.sort,
                    "No items found for filters"
                );
                LoadState::Empty
            }
            Ok(items) => {
                let sorted = sort_items(&items, Some(response.sort));
                info!(
                    genre = ?response.genre,
                    media = %response.media,
                    sort = %response.sort,
                    count = sorted.len(),
                    "Fetched gallery results"
                );
                LoadState::Loaded(sorted)
            }
            Err(e) => {
                error!(
                    error = %e,
                    genre = ?response.genre,
                    media = %response.media,
                    sort = %response.sort,
                    "Trending fetch error"
                );
                LoadState::Failed(GALLERY_ERROR.to_string())
            }
        };
        true
    }

    pub async fn refresh(&mut self) {
        let request = self.begin();
        let source = Arc::clone(&self.source);
        let response = request.execute(source.as_ref()).await;
        self.apply(response);
    }

    /// Navigation context for opening the item with `key` from the current grid.
    pub fn open(&self, key: MediaKey) -> Option<NavigationContext> {
        NavigationContext::for_key(self.items().to_vec(), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{movie, show, FakeSource};

    fn source() -> FakeSource {
        FakeSource::new(
            vec![movie(1, "Zeta", 10.0, "2020-01-01"), movie(2, "Beta", 30.0, "2021-01-01")],
            vec![show(1, "Alpha", 20.0, "2019-01-01")],
        )
    }

    #[tokio::test]
    async fn test_no_genre_uses_trending_and_sorts() {
        let source = Arc::new(source());
        let mut gallery = GalleryController::new(source.clone());
        gallery.refresh().await;

        assert_eq!(source.calls(), vec!["trending:all:week"]);
        let titles: Vec<&str> = gallery.items().iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["Beta", "Alpha", "Zeta"]);
        assert_eq!(gallery.title(), "Trending");
    }

    #[tokio::test]
    async fn test_genre_with_all_joins_both_discovers() {
        let source = Arc::new(source());
        let mut gallery = GalleryController::new(source.clone());
        gallery.set_genre(Some(18));
        gallery.set_sort(SortKey::TitleAsc);
        gallery.refresh().await;

        let calls = source.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.contains(&"discover:movie:Some(18):title.asc".to_string()));
        assert!(calls.contains(&"discover:tv:Some(18):title.asc".to_string()));

        let titles: Vec<&str> = gallery.items().iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta", "Zeta"]);
        assert_eq!(gallery.title(), "Trending by Genre");
    }

    #[tokio::test]
    async fn test_genre_with_single_type() {
        let source = Arc::new(source());
        let mut gallery = GalleryController::new(source.clone());
        gallery.set_media(MediaFilter::Tv);
        gallery.set_genre(Some(18));
        gallery.refresh().await;

        assert_eq!(source.calls(), vec!["discover:tv:Some(18):popularity.desc"]);
        assert_eq!(gallery.items().len(), 1);
        assert_eq!(gallery.title(), "Trending TV Shows by Genre");
    }

    #[tokio::test]
    async fn test_one_failed_discover_fails_the_gallery() {
        let source = Arc::new(source().failing("discover:tv"));
        let mut gallery = GalleryController::new(source);
        gallery.set_genre(Some(18));
        gallery.refresh().await;

        assert_eq!(gallery.state().error(), Some(GALLERY_ERROR));
        assert!(gallery.items().is_empty());
    }

    #[tokio::test]
    async fn test_empty_result_is_empty_state() {
        let source = Arc::new(FakeSource::new(vec![], vec![]));
        let mut gallery = GalleryController::new(source);
        gallery.set_media(MediaFilter::Movie);
        gallery.refresh().await;

        assert!(gallery.state().is_empty());
        assert_eq!(gallery.title(), "Trending Movies");
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let source = Arc::new(source());
        let mut gallery = GalleryController::new(source.clone());

        let stale = gallery.begin();
        gallery.set_media(MediaFilter::Tv);
        let fresh = gallery.begin();

        let stale_response = stale.execute(source.as_ref()).await;
        let fresh_response = fresh.execute(source.as_ref()).await;

        assert!(gallery.apply(fresh_response));
        assert!(!gallery.apply(stale_response));

        let titles: Vec<&str> = gallery.items().iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["Alpha"]);
    }

    #[tokio::test]
    async fn test_response_carries_filters_it_was_issued_with() {
        let source = Arc::new(source());
        let mut gallery = GalleryController::new(source.clone());
        gallery.set_genre(Some(18));

        let request = gallery.begin();
        gallery.set_media(MediaFilter::Tv);
        gallery.set_genre(None);
        let response = request.execute(source.as_ref()).await;

        assert_eq!(response.genre, Some(18));
        assert_eq!(response.media, MediaFilter::All);
        assert_eq!(response.sort, SortKey::PopularityDesc);
        assert!(gallery.apply(response));
        assert_eq!(gallery.items().len(), 3);
    }

    #[tokio::test]
    async fn test_config_defaults_apply() {
        let config = BrowseConfig {
            default_sort: SortKey::ReleaseDateAsc,
            time_window: TimeWindow::Day,
            clear_genre_on_media_change: false,
        };
        let source = Arc::new(source());
        let mut gallery = GalleryController::with_config(source.clone(), &config);
        gallery.refresh().await;

        assert_eq!(source.calls(), vec!["trending:all:day"]);
        assert_eq!(gallery.items()[0].title(), "Alpha");
    }

    #[tokio::test]
    async fn test_open_builds_navigation_context() {
        let source = Arc::new(source());
        let mut gallery = GalleryController::new(source);
        gallery.refresh().await;

        let nav = gallery.open(MediaKey { media_type: MediaType::Tv, id: 1 }).unwrap();
        assert_eq!(nav.index(), 1);
        assert_eq!(nav.len(), 3);
    }
}
