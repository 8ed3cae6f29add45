use crate::navigation::NavigationContext;
use crate::request::{RequestToken, RequestTracker};
use crate::sort::sort_items;
use crate::view::LoadState;
use catalog_client::{ClientError, MetadataSource};
use catalog_models::{MediaFilter, MediaItem, MediaKey, Page, SortKey};
use std::sync::Arc;
use tracing::{error, info};

pub const SEARCH_ERROR: &str = "Failed to search. Please try again.";

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub token: RequestToken,
    pub query: String,
    pub media: MediaFilter,
    pub page: u32,
}

#[derive(Debug)]
pub struct SearchResponse {
    pub token: RequestToken,
    pub result: Result<Page<MediaItem>, ClientError>,
}

impl SearchRequest {
    pub async fn execute(self, source: &dyn MetadataSource) -> SearchResponse {
        let result = source.search(&self.query, self.media, self.page).await;
        SearchResponse {
            token: self.token,
            result,
        }
    }
}

/// Query-driven result list with paging and a client-side sort.
///
/// Results keep the service's relevance order until a sort key is chosen.
pub struct SearchController {
    source: Arc<dyn MetadataSource>,
    query: String,
    media: MediaFilter,
    page: u32,
    sort: Option<SortKey>,
    total_pages: u32,
    total_results: u64,
    /// Last page as the service ordered it.
    fetched: Vec<MediaItem>,
    state: LoadState<Vec<MediaItem>>,
    tracker: RequestTracker,
}

impl SearchController {
    pub fn new(source: Arc<dyn MetadataSource>) -> Self {
        Self {
            source,
            query: String::new(),
            media: MediaFilter::All,
            page: 1,
            sort: None,
            total_pages: 0,
            total_results: 0,
            fetched: Vec::new(),
            state: LoadState::Idle,
            tracker: RequestTracker::new(),
        }
    }

    pub fn state(&self) -> &LoadState<Vec<MediaItem>> {
        &self.state
    }

    pub fn results(&self) -> &[MediaItem] {
        self.state.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn media(&self) -> MediaFilter {
        self.media
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    /// New query text (trimmed). Resets to page one.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_string();
        self.page = 1;
    }

    /// New media filter. Resets to page one.
    pub fn set_media(&mut self, media: MediaFilter) {
        self.media = media;
        self.page = 1;
    }

    /// Jump to `page`. Out-of-range pages are refused once the page count is known.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page == 0 || (self.total_pages > 0 && page > self.total_pages) {
            return false;
        }
        self.page = page;
        true
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }

    pub fn next_page(&mut self) -> bool {
        self.has_next_page() && self.set_page(self.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.has_prev_page() && self.set_page(self.page - 1)
    }

    /// Re-order the loaded results without a new fetch. `None` restores relevance order.
    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
        if let Some(results) = self.state.value_mut() {
            *results = sort_items(&self.fetched, sort);
        }
    }

    /// Snapshot the inputs under a fresh token. An empty query clears the
    /// results instead and issues nothing.
    pub fn begin(&mut self) -> Option<SearchRequest> {
        if self.query.is_empty() {
            self.tracker.invalidate();
            self.state = LoadState::Idle;
            self.total_pages = 0;
            self.total_results = 0;
            self.fetched.clear();
            return None;
        }

        self.state = LoadState::Loading;
        Some(SearchRequest {
            token: self.tracker.issue(),
            query: self.query.clone(),
            media: self.media,
            page: self.page,
        })
    }

    pub fn apply(&mut self, response: SearchResponse) -> bool {
        if !self.tracker.is_current(response.token) {
            info!(token = response.token.value(), "Discarding stale search response");
            return false;
        }

        match response.result {
            Ok(page) => {
                self.total_pages = page.total_pages;
                self.total_results = page.total_results;
                info!(
                    query = %self.query,
                    media = %self.media,
                    page = self.page,
                    count = page.results.len(),
                    total_pages = page.total_pages,
                    "Search results"
                );
                self.state = if page.results.is_empty() {
                    LoadState::Empty
                } else {
                    LoadState::Loaded(sort_items(&page.results, self.sort))
                };
                self.fetched = page.results;
            }
            Err(e) => {
                error!(error = %e, query = %self.query, "Search error");
                self.fetched.clear();
                self.state = LoadState::Failed(SEARCH_ERROR.to_string());
            }
        }
        true
    }

    pub async fn run(&mut self) {
        let Some(request) = self.begin() else {
            return;
        };
        let source = Arc::clone(&self.source);
        let response = request.execute(source.as_ref()).await;
        self.apply(response);
    }

    pub fn open(&self, key: MediaKey) -> Option<NavigationContext> {
        NavigationContext::for_key(self.results().to_vec(), key)
    }
}
