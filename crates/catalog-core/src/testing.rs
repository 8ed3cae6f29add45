//! In-memory metadata source and fixtures shared by the controller tests.

use async_trait::async_trait;
use catalog_client::{ClientError, DiscoverParams, MetadataSource};
use catalog_models::{
    Genre, MediaFilter, MediaItem, MediaType, Movie, MovieDetails, Page, TimeWindow, TvShow, TvShowDetails,
};
use std::collections::HashSet;
use std::sync::Mutex;

pub fn movie(id: u64, title: &str, popularity: f64, release_date: &str) -> MediaItem {
    MediaItem::Movie(Movie {
        id,
        title: title.to_string(),
        overview: format!("Overview of {}", title),
        poster_path: None,
        backdrop_path: None,
        release_date: release_date.to_string(),
        vote_average: popularity / 10.0,
        vote_count: 100,
        genre_ids: vec![18],
        adult: false,
        original_language: "en".to_string(),
        original_title: title.to_string(),
        popularity,
        video: false,
    })
}

pub fn show(id: u64, name: &str, popularity: f64, first_air_date: &str) -> MediaItem {
    MediaItem::Tv(TvShow {
        id,
        name: name.to_string(),
        overview: format!("Overview of {}", name),
        poster_path: None,
        backdrop_path: None,
        first_air_date: first_air_date.to_string(),
        vote_average: popularity / 10.0,
        vote_count: 50,
        genre_ids: vec![18],
        origin_country: vec!["US".to_string()],
        original_language: "en".to_string(),
        original_name: name.to_string(),
        popularity,
    })
}

pub fn page_of(results: Vec<MediaItem>) -> Page<MediaItem> {
    Page {
        page: 1,
        total_pages: 1,
        total_results: results.len() as u64,
        results,
    }
}

#[derive(Default)]
pub struct FakeSource {
    pub movies: Vec<MediaItem>,
    pub shows: Vec<MediaItem>,
    pub movie_genres: Vec<Genre>,
    pub tv_genres: Vec<Genre>,
    pub total_pages: u32,
    /// Operation names ("trending", "discover:tv", "genres:movie", ...) that fail.
    pub failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new(movies: Vec<MediaItem>, shows: Vec<MediaItem>) -> Self {
        Self {
            movies,
            shows,
            total_pages: 1,
            ..Self::default()
        }
    }

    pub fn failing(mut self, operation: &str) -> Self {
        self.failing.insert(operation.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String, operation: &str) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(operation) {
            return Err(ClientError::api(operation, 500, "boom"));
        }
        Ok(())
    }

    fn page(&self, results: Vec<MediaItem>, page: u32) -> Page<MediaItem> {
        Page {
            page,
            total_pages: self.total_pages,
            total_results: results.len() as u64,
            results,
        }
    }

    fn matching(&self, items: &[MediaItem], query: &str) -> Vec<MediaItem> {
        let query = query.to_lowercase();
        items
            .iter()
            .filter(|i| i.title().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl MetadataSource for FakeSource {
    fn source_name(&self) -> &str {
        "fake"
    }

    async fn search_multi(&self, query: &str, page: u32) -> Result<Page<MediaItem>, ClientError> {
        self.record(format!("search:all:{}:{}", query, page), "search")?;
        let mut results = self.matching(&self.movies, query);
        results.extend(self.matching(&self.shows, query));
        Ok(self.page(results, page))
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<Page<MediaItem>, ClientError> {
        self.record(format!("search:movie:{}:{}", query, page), "search")?;
        Ok(self.page(self.matching(&self.movies, query), page))
    }

    async fn search_tv(&self, query: &str, page: u32) -> Result<Page<MediaItem>, ClientError> {
        self.record(format!("search:tv:{}:{}", query, page), "search")?;
        Ok(self.page(self.matching(&self.shows, query), page))
    }

    async fn trending(&self, filter: MediaFilter, window: TimeWindow, page: u32) -> Result<Page<MediaItem>, ClientError> {
        self.record(format!("trending:{}:{}", filter, window), "trending")?;
        let results = match filter {
            MediaFilter::Movie => self.movies.clone(),
            MediaFilter::Tv => self.shows.clone(),
            MediaFilter::All => {
                let mut all = self.shows.clone();
                all.extend(self.movies.clone());
                all
            }
        };
        Ok(self.page(results, page))
    }

    async fn discover(&self, media_type: MediaType, params: &DiscoverParams) -> Result<Page<MediaItem>, ClientError> {
        let operation = format!("discover:{}", media_type);
        self.record(
            format!("{}:{:?}:{}", operation, params.genre, params.sort),
            &operation,
        )?;
        let pool = match media_type {
            MediaType::Movie => &self.movies,
            MediaType::Tv => &self.shows,
        };
        let results = pool
            .iter()
            .filter(|i| params.genre.map_or(true, |g| i.genre_ids().contains(&g)))
            .cloned()
            .collect();
        Ok(self.page(results, params.page))
    }

    async fn genres(&self, media_type: MediaType) -> Result<Vec<Genre>, ClientError> {
        let operation = format!("genres:{}", media_type);
        self.record(operation.clone(), &operation)?;
        Ok(match media_type {
            MediaType::Movie => self.movie_genres.clone(),
            MediaType::Tv => self.tv_genres.clone(),
        })
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, ClientError> {
        self.record(format!("details:movie:{}", id), "details")?;
        match self.movies.iter().find(|m| m.id() == id) {
            Some(MediaItem::Movie(m)) => Ok(MovieDetails {
                movie: m.clone(),
                genres: vec![],
                runtime: Some(120),
                budget: 0,
                revenue: 0,
                tagline: None,
                homepage: None,
                imdb_id: None,
                status: "Released".to_string(),
            }),
            _ => Err(ClientError::api(format!("/movie/{}", id), 404, "not found")),
        }
    }

    async fn tv_details(&self, id: u64) -> Result<TvShowDetails, ClientError> {
        self.record(format!("details:tv:{}", id), "details")?;
        match self.shows.iter().find(|s| s.id() == id) {
            Some(MediaItem::Tv(s)) => Ok(TvShowDetails {
                show: s.clone(),
                genres: vec![],
                episode_run_time: vec![45],
                number_of_seasons: 2,
                number_of_episodes: 20,
                status: "Ended".to_string(),
                tagline: None,
                homepage: None,
                in_production: false,
                last_air_date: None,
                languages: vec![],
                show_type: None,
            }),
            _ => Err(ClientError::api(format!("/tv/{}", id), 404, "not found")),
        }
    }
}
