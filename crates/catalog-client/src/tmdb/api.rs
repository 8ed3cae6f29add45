use catalog_models::{Genre, MediaFilter, MediaItem, MediaType, Movie, TimeWindow, TvShow};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Poster size used by the detail view.
pub const DETAIL_IMAGE_SIZE: &str = "w500";
/// Poster size used by list cards.
pub const CARD_IMAGE_SIZE: &str = "w342";

#[derive(Debug, Deserialize)]
pub(crate) struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Error body TMDB sends with non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusBody {
    #[serde(default)]
    pub status_message: Option<String>,
}

/// Full image URL for a poster/backdrop path, or `None` when the item has no image.
pub fn image_url(base: &str, path: Option<&str>, size: &str) -> Option<String> {
    let path = path.filter(|p| !p.trim().is_empty())?;
    let separator = if path.starts_with('/') { "" } else { "/" };
    Some(format!("{}/{}{}{}", base.trim_end_matches('/'), size, separator, path))
}

pub(crate) fn search_path(filter: MediaFilter) -> &'static str {
    match filter {
        MediaFilter::Movie => "/search/movie",
        MediaFilter::Tv => "/search/tv",
        MediaFilter::All => "/search/multi",
    }
}

pub(crate) fn trending_path(filter: MediaFilter, window: TimeWindow) -> String {
    format!("/trending/{}/{}", filter.as_str(), window.as_str())
}

pub(crate) fn discover_path(media_type: MediaType) -> String {
    format!("/discover/{}", media_type.as_str())
}

pub(crate) fn genre_path(media_type: MediaType) -> String {
    format!("/genre/{}/list", media_type.as_str())
}

pub(crate) fn details_path(media_type: MediaType, id: u64) -> String {
    format!("/{}/{}", media_type.as_str(), id)
}

/// Decode one result from an endpoint that only returns `media_type`.
pub(crate) fn decode_typed(media_type: MediaType, value: Value) -> Option<MediaItem> {
    let decoded = match media_type {
        MediaType::Movie => serde_json::from_value::<Movie>(value).map(MediaItem::Movie),
        MediaType::Tv => serde_json::from_value::<TvShow>(value).map(MediaItem::Tv),
    };

    match decoded {
        Ok(item) => Some(item),
        Err(e) => {
            warn!(media_type = %media_type, error = %e, "Skipping malformed result");
            None
        }
    }
}

/// Decode one result from a mixed endpoint (`search/multi`, `trending/all`).
///
/// The tag comes from TMDB's `media_type` field; when that is absent the
/// presence of `title` (movies) or `name` (shows) decides. People are dropped.
pub(crate) fn decode_mixed(value: Value) -> Option<MediaItem> {
    let media_type = match value.get("media_type").and_then(|v| v.as_str()) {
        Some("movie") => MediaType::Movie,
        Some("tv") => MediaType::Tv,
        Some(other) => {
            debug!(media_type = other, "Ignoring non-title search result");
            return None;
        }
        None if value.get("title").is_some() => MediaType::Movie,
        None if value.get("name").is_some() => MediaType::Tv,
        None => {
            warn!("Skipping result with neither title nor name");
            return None;
        }
    };

    decode_typed(media_type, value)
}
