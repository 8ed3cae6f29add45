use crate::genre::Genre;
use crate::media::{MediaItem, MediaKey, MediaType, Movie, TvShow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TvShowDetails {
    #[serde(flatten)]
    pub show: TvShow,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub number_of_seasons: u32,
    #[serde(default)]
    pub number_of_episodes: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub in_production: bool,
    #[serde(default)]
    pub last_air_date: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "type", default)]
    pub show_type: Option<String>,
}

/// Extended record shown by the detail view. Fetched per visit, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum MediaDetails {
    Movie(MovieDetails),
    Tv(TvShowDetails),
}

impl MediaDetails {
    pub fn media_type(&self) -> MediaType {
        match self {
            MediaDetails::Movie(_) => MediaType::Movie,
            MediaDetails::Tv(_) => MediaType::Tv,
        }
    }

    pub fn key(&self) -> MediaKey {
        let id = match self {
            MediaDetails::Movie(d) => d.movie.id,
            MediaDetails::Tv(d) => d.show.id,
        };
        MediaKey {
            media_type: self.media_type(),
            id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MediaDetails::Movie(d) => &d.movie.title,
            MediaDetails::Tv(d) => &d.show.name,
        }
    }

    pub fn overview(&self) -> &str {
        match self {
            MediaDetails::Movie(d) => &d.movie.overview,
            MediaDetails::Tv(d) => &d.show.overview,
        }
    }

    pub fn poster_path(&self) -> Option<&str> {
        match self {
            MediaDetails::Movie(d) => d.movie.poster_path.as_deref(),
            MediaDetails::Tv(d) => d.show.poster_path.as_deref(),
        }
    }

    pub fn release_date(&self) -> &str {
        match self {
            MediaDetails::Movie(d) => &d.movie.release_date,
            MediaDetails::Tv(d) => &d.show.first_air_date,
        }
    }

    pub fn vote_average(&self) -> f64 {
        match self {
            MediaDetails::Movie(d) => d.movie.vote_average,
            MediaDetails::Tv(d) => d.show.vote_average,
        }
    }

    pub fn vote_count(&self) -> u64 {
        match self {
            MediaDetails::Movie(d) => d.movie.vote_count,
            MediaDetails::Tv(d) => d.show.vote_count,
        }
    }

    pub fn genres(&self) -> &[Genre] {
        match self {
            MediaDetails::Movie(d) => &d.genres,
            MediaDetails::Tv(d) => &d.genres,
        }
    }

    /// Movie runtime, or the first listed episode runtime for shows (minutes).
    pub fn runtime(&self) -> Option<u32> {
        match self {
            MediaDetails::Movie(d) => d.runtime.filter(|r| *r > 0),
            MediaDetails::Tv(d) => d.episode_run_time.first().copied(),
        }
    }

    pub fn tagline(&self) -> Option<&str> {
        let tagline = match self {
            MediaDetails::Movie(d) => d.tagline.as_deref(),
            MediaDetails::Tv(d) => d.tagline.as_deref(),
        };
        tagline.filter(|t| !t.trim().is_empty())
    }

    pub fn homepage(&self) -> Option<&str> {
        let homepage = match self {
            MediaDetails::Movie(d) => d.homepage.as_deref(),
            MediaDetails::Tv(d) => d.homepage.as_deref(),
        };
        homepage.filter(|h| !h.trim().is_empty())
    }

    pub fn status(&self) -> &str {
        match self {
            MediaDetails::Movie(d) => &d.status,
            MediaDetails::Tv(d) => &d.status,
        }
    }

    /// The summary view of this record, e.g. to seed a navigation list.
    pub fn summary(&self) -> MediaItem {
        match self {
            MediaDetails::Movie(d) => MediaItem::Movie(d.movie.clone()),
            MediaDetails::Tv(d) => MediaItem::Tv(d.show.clone()),
        }
    }
}
