use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Movie => "Movie",
            MediaType::Tv => "TV Show",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" => Ok(MediaType::Movie),
            "tv" => Ok(MediaType::Tv),
            other => Err(format!("Invalid media type: {}. Use 'movie' or 'tv'", other)),
        }
    }
}

/// Identity of a catalog entry. TMDB ids are only unique within a media type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MediaKey {
    pub media_type: MediaType,
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub video: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TvShow {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub popularity: f64,
}

/// A movie or TV show summary as returned by search, trending and discover.
///
/// The variant is fixed when the item is decoded, so callers never need to
/// probe for `title` versus `name` to tell the two apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum MediaItem {
    Movie(Movie),
    Tv(TvShow),
}

impl MediaItem {
    pub fn media_type(&self) -> MediaType {
        match self {
            MediaItem::Movie(_) => MediaType::Movie,
            MediaItem::Tv(_) => MediaType::Tv,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            MediaItem::Movie(m) => m.id,
            MediaItem::Tv(t) => t.id,
        }
    }

    pub fn key(&self) -> MediaKey {
        MediaKey {
            media_type: self.media_type(),
            id: self.id(),
        }
    }

    /// Display title: the movie's `title` or the show's `name`.
    pub fn title(&self) -> &str {
        match self {
            MediaItem::Movie(m) => &m.title,
            MediaItem::Tv(t) => &t.name,
        }
    }

    pub fn overview(&self) -> &str {
        match self {
            MediaItem::Movie(m) => &m.overview,
            MediaItem::Tv(t) => &t.overview,
        }
    }

    pub fn poster_path(&self) -> Option<&str> {
        match self {
            MediaItem::Movie(m) => m.poster_path.as_deref(),
            MediaItem::Tv(t) => t.poster_path.as_deref(),
        }
    }

    pub fn popularity(&self) -> f64 {
        match self {
            MediaItem::Movie(m) => m.popularity,
            MediaItem::Tv(t) => t.popularity,
        }
    }

    pub fn vote_average(&self) -> f64 {
        match self {
            MediaItem::Movie(m) => m.vote_average,
            MediaItem::Tv(t) => t.vote_average,
        }
    }

    pub fn vote_count(&self) -> u64 {
        match self {
            MediaItem::Movie(m) => m.vote_count,
            MediaItem::Tv(t) => t.vote_count,
        }
    }

    pub fn genre_ids(&self) -> &[u64] {
        match self {
            MediaItem::Movie(m) => &m.genre_ids,
            MediaItem::Tv(t) => &t.genre_ids,
        }
    }

    /// Release date for movies, first air date for shows. May be empty.
    pub fn release_date(&self) -> &str {
        match self {
            MediaItem::Movie(m) => &m.release_date,
            MediaItem::Tv(t) => &t.first_air_date,
        }
    }

    /// Release date as a unix timestamp. `None` for empty or malformed dates,
    /// which orders before every real date, including those before 1970.
    pub fn release_timestamp(&self) -> Option<i64> {
        parse_date(self.release_date())
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc().timestamp())
    }

    pub fn year(&self) -> Option<i32> {
        parse_date(self.release_date()).map(|d| d.year())
    }
}

impl From<Movie> for MediaItem {
    fn from(movie: Movie) -> Self {
        MediaItem::Movie(movie)
    }
}

impl From<TvShow> for MediaItem {
    fn from(show: TvShow) -> Self {
        MediaItem::Tv(show)
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_media_item_decodes_tagged_json() {
        let value = json!({
            "media_type": "tv",
            "id": 1399,
            "name": "Game of Thrones",
            "first_air_date": "2011-04-17",
            "popularity": 120.5,
            "vote_average": 8.4,
            "vote_count": 21000
        });

        let item: MediaItem = serde_json::from_value(value).unwrap();
        assert_eq!(item.media_type(), MediaType::Tv);
        assert_eq!(item.title(), "Game of Thrones");
        assert_eq!(item.year(), Some(2011));
        assert_eq!(item.poster_path(), None);
    }

    #[test]
    fn test_release_timestamp_empty_is_none() {
        let movie = MediaItem::Movie(Movie {
            id: 1,
            title: "Undated".to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 0.0,
            vote_count: 0,
            genre_ids: vec![],
            adult: false,
            original_language: "en".to_string(),
            original_title: "Undated".to_string(),
            popularity: 0.0,
            video: false,
        });
        assert_eq!(movie.release_timestamp(), None);
        assert_eq!(movie.year(), None);
    }

    #[test]
    fn test_keys_differ_across_media_types() {
        let movie: MediaItem = serde_json::from_value(json!({"media_type": "movie", "id": 7, "title": "A"})).unwrap();
        let show: MediaItem = serde_json::from_value(json!({"media_type": "tv", "id": 7, "name": "A"})).unwrap();
        assert_eq!(movie.id(), show.id());
        assert_ne!(movie.key(), show.key());
    }

    #[test]
    fn test_media_type_from_str() {
        assert_eq!("movie".parse::<MediaType>().unwrap(), MediaType::Movie);
        assert_eq!(" TV ".parse::<MediaType>().unwrap(), MediaType::Tv);
        assert!("person".parse::<MediaType>().is_err());
    }
}
