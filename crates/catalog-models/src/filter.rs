use crate::media::MediaType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Media-type selection for gallery and search: one type or both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaFilter {
    Movie,
    Tv,
    #[default]
    All,
}

impl MediaFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFilter::Movie => "movie",
            MediaFilter::Tv => "tv",
            MediaFilter::All => "all",
        }
    }

    /// The single media type selected, or `None` for `All`.
    pub fn media_type(&self) -> Option<MediaType> {
        match self {
            MediaFilter::Movie => Some(MediaType::Movie),
            MediaFilter::Tv => Some(MediaType::Tv),
            MediaFilter::All => None,
        }
    }
}

impl From<MediaType> for MediaFilter {
    fn from(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Movie => MediaFilter::Movie,
            MediaType::Tv => MediaFilter::Tv,
        }
    }
}

impl fmt::Display for MediaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" => Ok(MediaFilter::Movie),
            "tv" => Ok(MediaFilter::Tv),
            "all" | "" => Ok(MediaFilter::All),
            other => Err(format!("Invalid media filter: {}. Use 'movie', 'tv', or 'all'", other)),
        }
    }
}

/// Trending window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(TimeWindow::Day),
            "week" => Ok(TimeWindow::Week),
            other => Err(format!("Invalid time window: {}. Use 'day' or 'week'", other)),
        }
    }
}
