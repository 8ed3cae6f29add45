use catalog_models::{MediaFilter, MediaKey, MediaType, SortKey};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix the hosted deployment serves under; accepted and ignored when parsing.
pub const BASENAME: &str = "/movieExplorer";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    Unknown(String),

    #[error("Invalid media type '{0}' (expected movie or tv)")]
    InvalidMediaType(String),

    #[error("Invalid id '{0}' (expected a positive integer)")]
    InvalidId(String),

    #[error("Invalid query parameter {name}={value}")]
    InvalidParam { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoute {
    pub query: String,
    pub media: MediaFilter,
    pub sort: Option<SortKey>,
    pub page: u32,
}

impl Default for SearchRoute {
    fn default() -> Self {
        Self {
            query: String::new(),
            media: MediaFilter::All,
            sort: None,
            page: 1,
        }
    }
}

/// The three addressable screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Gallery,
    Search(SearchRoute),
    Details(MediaKey),
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn parse_search(query: &str) -> Result<SearchRoute, RouteError> {
    let mut route = SearchRoute::default();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = decode(value);
        match name {
            "q" => route.query = value.trim().to_string(),
            "type" => {
                route.media = value
                    .parse()
                    .map_err(|_| RouteError::InvalidParam { name: "type", value })?;
            }
            // Unknown sort keys fall back to relevance order
            "sort" => route.sort = SortKey::parse(&value),
            "page" => {
                route.page = match value.parse::<u32>() {
                    Ok(page) if page > 0 => page,
                    _ => return Err(RouteError::InvalidParam { name: "page", value }),
                };
            }
            // Unknown parameters are ignored.
            _ => {}
        }
    }
    Ok(route)
}

fn parse_details(media_type: &str, id: &str) -> Result<Route, RouteError> {
    let media_type = match media_type {
        "movie" => MediaType::Movie,
        "tv" => MediaType::Tv,
        other => return Err(RouteError::InvalidMediaType(other.to_string())),
    };
    let id = match id.parse::<u64>() {
        Ok(id) if id > 0 => id,
        _ => return Err(RouteError::InvalidId(id.to_string())),
    };
    Ok(Route::Details(MediaKey { media_type, id }))
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (path, query) = input.split_once('?').unwrap_or((input, ""));

        let path = path.strip_prefix(BASENAME).unwrap_or(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::Gallery),
            ["search"] => Ok(Route::Search(parse_search(query)?)),
            ["details", media_type, id] => parse_details(media_type, id),
            _ => Err(RouteError::Unknown(input.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Gallery => write!(f, "/"),
            Route::Details(key) => write!(f, "/details/{}/{}", key.media_type, key.id),
            Route::Search(search) => {
                write!(f, "/search?q={}", urlencoding::encode(&search.query))?;
                if search.media != MediaFilter::All {
                    write!(f, "&type={}", search.media)?;
                }
                if let Some(sort) = search.sort {
                    write!(f, "&sort={}", sort)?;
                }
                if search.page != 1 {
                    write!(f, "&page={}", search.page)?;
                }
                Ok(())
            }
        }
    }
}
