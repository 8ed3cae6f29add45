use crate::navigation::NavigationContext;
use crate::request::{RequestToken, RequestTracker};
use crate::view::LoadState;
use catalog_client::{ClientError, MetadataSource};
use catalog_models::{MediaDetails, MediaKey};
use std::sync::Arc;
use tracing::{debug, error, info};

pub const DETAILS_ERROR: &str = "Failed to load details. Please try again.";

#[derive(Debug, Clone)]
pub struct DetailRequest {
    pub token: RequestToken,
    pub key: MediaKey,
}

#[derive(Debug)]
pub struct DetailResponse {
    pub token: RequestToken,
    pub key: MediaKey,
    pub result: Result<MediaDetails, ClientError>,
}

impl DetailRequest {
    pub async fn execute(self, source: &dyn MetadataSource) -> DetailResponse {
        let result = source.details(self.key).await;
        DetailResponse {
            token: self.token,
            key: self.key,
            result,
        }
    }
}

/// Full record for one title, with prev/next across the list it was opened from.
pub struct DetailController {
    source: Arc<dyn MetadataSource>,
    key: MediaKey,
    context: Option<NavigationContext>,
    state: LoadState<MediaDetails>,
    tracker: RequestTracker,
}

impl DetailController {
    pub fn new(source: Arc<dyn MetadataSource>, key: MediaKey, context: Option<NavigationContext>) -> Self {
        // A context that does not sit on `key` would make prev/next lie.
        let context = context.filter(|ctx| ctx.current().key() == key);
        Self {
            source,
            key,
            context,
            state: LoadState::Idle,
            tracker: RequestTracker::new(),
        }
    }

    pub fn from_context(source: Arc<dyn MetadataSource>, context: NavigationContext) -> Self {
        let key = context.current().key();
        Self::new(source, key, Some(context))
    }

    pub fn key(&self) -> MediaKey {
        self.key
    }

    pub fn state(&self) -> &LoadState<MediaDetails> {
        &self.state
    }

    pub fn details(&self) -> Option<&MediaDetails> {
        self.state.value()
    }

    pub fn context(&self) -> Option<&NavigationContext> {
        self.context.as_ref()
    }

    pub fn has_prev(&self) -> bool {
        self.context.as_ref().is_some_and(NavigationContext::has_prev)
    }

    pub fn has_next(&self) -> bool {
        self.context.as_ref().is_some_and(NavigationContext::has_next)
    }

    /// "i of n" within the originating list; a lone title is "1 of 1".
    pub fn position_label(&self) -> String {
        self.context
            .as_ref()
            .map(NavigationContext::position_label)
            .unwrap_or_else(|| "1 of 1".to_string())
    }

    pub fn begin(&mut self) -> DetailRequest {
        self.state = LoadState::Loading;
        DetailRequest {
            token: self.tracker.issue(),
            key: self.key,
        }
    }

    pub fn apply(&mut self, response: DetailResponse) -> bool {
        if !self.tracker.is_current(response.token) || response.key != self.key {
            info!(
                token = response.token.value(),
                media_type = %response.key.media_type,
                id = response.key.id,
                "Discarding stale details response"
            );
            return false;
        }

        self.state = match response.result {
            Ok(details) => {
                debug!(title = details.title(), "Loaded details");
                LoadState::Loaded(details)
            }
            Err(e) => {
                error!(
                    error = %e,
                    media_type = %self.key.media_type,
                    id = self.key.id,
                    "Error fetching details"
                );
                LoadState::Failed(DETAILS_ERROR.to_string())
            }
        };
        true
    }

    pub async fn load(&mut self) {
        let request = self.begin();
        let source = Arc::clone(&self.source);
        let response = request.execute(source.as_ref()).await;
        self.apply(response);
    }

    /// Move to the next title and load it. At the end of the list nothing happens.
    pub async fn next(&mut self) -> bool {
        let Some(key) = self.context.as_mut().and_then(|ctx| ctx.next()).map(|item| item.key()) else {
            return false;
        };
        self.key = key;
        self.load().await;
        true
    }

    /// Move to the previous title and load it. At the start of the list nothing happens.
    pub async fn prev(&mut self) -> bool {
        let Some(key) = self.context.as_mut().and_then(|ctx| ctx.prev()).map(|item| item.key()) else {
            return false;
        };
        self.key = key;
        self.load().await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{movie, show, FakeSource};
    use catalog_models::{MediaItem, MediaType};

    fn items() -> Vec<MediaItem> {
        vec![movie(1, "Heat", 50.0, "1995-12-15"), show(7, "The Wire", 40.0, "2002-06-02")]
    }

    fn source() -> Arc<FakeSource> {
        let items = items();
        Arc::new(FakeSource::new(vec![items[0].clone()], vec![items[1].clone()]))
    }

    #[tokio::test]
    async fn test_load_movie_details() {
        let source = source();
        let mut detail = DetailController::new(source.clone(), MediaKey { media_type: MediaType::Movie, id: 1 }, None);
        detail.load().await;

        let details = detail.details().unwrap();
        assert_eq!(details.title(), "Heat");
        assert_eq!(details.runtime(), Some(120));
        assert_eq!(detail.position_label(), "1 of 1");
        assert!(!detail.has_next());
    }

    #[tokio::test]
    async fn test_next_and_prev_follow_context() {
        let source = source();
        let context = NavigationContext::new(items(), 0).unwrap();
        let mut detail = DetailController::from_context(source.clone(), context);
        detail.load().await;

        assert!(detail.next().await);
        assert_eq!(detail.key(), MediaKey { media_type: MediaType::Tv, id: 7 });
        assert_eq!(detail.details().unwrap().runtime(), Some(45));
        assert_eq!(detail.position_label(), "2 of 2");

        assert!(detail.prev().await);
        assert_eq!(detail.details().unwrap().title(), "Heat");
        assert_eq!(source.calls(), vec!["details:movie:1", "details:tv:7", "details:movie:1"]);
    }

    #[tokio::test]
    async fn test_next_at_last_item_does_not_fetch() {
        let source = source();
        let context = NavigationContext::new(items(), 1).unwrap();
        let mut detail = DetailController::from_context(source.clone(), context);
        detail.load().await;

        assert!(!detail.next().await);
        assert_eq!(source.calls(), vec!["details:tv:7"]);
        assert_eq!(detail.position_label(), "2 of 2");
    }

    #[tokio::test]
    async fn test_missing_title_fails_with_message() {
        let source = source();
        let mut detail = DetailController::new(source, MediaKey { media_type: MediaType::Tv, id: 99 }, None);
        detail.load().await;
        assert_eq!(detail.state().error(), Some(DETAILS_ERROR));
    }

    #[tokio::test]
    async fn test_response_for_previous_title_is_discarded() {
        let source = source();
        let context = NavigationContext::new(items(), 0).unwrap();
        let mut detail = DetailController::from_context(source.clone(), context);

        let stale = detail.begin();
        assert!(detail.next().await);

        let response = stale.execute(source.as_ref()).await;
        assert!(!detail.apply(response));
        assert_eq!(detail.details().unwrap().title(), "The Wire");
    }

    #[test]
    fn test_mismatched_context_is_dropped() {
        let context = NavigationContext::new(items(), 1).unwrap();
        let detail = DetailController::new(source(), MediaKey { media_type: MediaType::Movie, id: 1 }, Some(context));
        assert!(detail.context().is_none());
    }
}
