use catalog_client::{ClientError, MetadataSource};
use catalog_models::{Genre, GenreId, MediaFilter, MediaType};
use std::collections::HashSet;
use tracing::{debug, error};

/// Genres offered for a media selection.
///
/// A single type gets its own list untouched. `All` gets the union of both
/// lists, first occurrence of each id kept, sorted by name.
pub fn available_genres(movie_genres: &[Genre], tv_genres: &[Genre], media: MediaFilter) -> Vec<Genre> {
    match media {
        MediaFilter::Movie => movie_genres.to_vec(),
        MediaFilter::Tv => tv_genres.to_vec(),
        MediaFilter::All => {
            let mut seen = HashSet::new();
            let mut merged: Vec<Genre> = movie_genres
                .iter()
                .chain(tv_genres.iter())
                .filter(|g| seen.insert(g.id))
                .cloned()
                .collect();
            merged.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            });
            merged
        }
    }
}

/// Fetch the movie and TV genre lists together. Either failure fails both.
pub async fn load_genres(source: &dyn MetadataSource) -> Result<(Vec<Genre>, Vec<Genre>), ClientError> {
    let (movie, tv) = futures::try_join!(source.genres(MediaType::Movie), source.genres(MediaType::Tv))
        .map_err(|e| ClientError::combined("Genre fetch", e))?;
    debug!(movie = movie.len(), tv = tv.len(), "Loaded genre lists");
    Ok((movie, tv))
}

/// The gallery's genre and media-type selection plus the genre lists behind it.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    genre: Option<GenreId>,
    media: MediaFilter,
    movie_genres: Vec<Genre>,
    tv_genres: Vec<Genre>,
    clear_genre_on_media_change: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, switching media type drops the genre selection.
    pub fn with_clear_genre_on_media_change(mut self, clear: bool) -> Self {
        self.clear_genre_on_media_change = clear;
        self
    }

    pub fn genre(&self) -> Option<GenreId> {
        self.genre
    }

    pub fn media(&self) -> MediaFilter {
        self.media
    }

    pub fn set_genre(&mut self, genre: Option<GenreId>) {
        self.genre = genre;
    }

    pub fn set_media(&mut self, media: MediaFilter) {
        if self.clear_genre_on_media_change && media != self.media {
            self.genre = None;
        }
        self.media = media;
    }

    /// Back to no genre and all media types.
    pub fn clear(&mut self) {
        self.genre = None;
        self.media = MediaFilter::All;
    }

    pub fn is_active(&self) -> bool {
        self.genre.is_some() || self.media != MediaFilter::All
    }

    pub fn set_genre_lists(&mut self, movie_genres: Vec<Genre>, tv_genres: Vec<Genre>) {
        self.movie_genres = movie_genres;
        self.tv_genres = tv_genres;
    }

    pub fn has_genre_lists(&self) -> bool {
        !self.movie_genres.is_empty() || !self.tv_genres.is_empty()
    }

    pub fn available_genres(&self) -> Vec<Genre> {
        available_genres(&self.movie_genres, &self.tv_genres, self.media)
    }

    /// Name of the selected genre, looked up in the currently offered list.
    pub fn genre_name(&self) -> Option<String> {
        let id = self.genre?;
        self.available_genres()
            .into_iter()
            .find(|g| g.id == id)
            .map(|g| g.name)
    }

    /// Whether the selected genre (if any) is offered for the current media type.
    pub fn genre_is_offered(&self) -> bool {
        match self.genre {
            None => true,
            Some(id) => self.available_genres().iter().any(|g| g.id == id),
        }
    }

    /// Load both genre lists. On failure the lists stay empty and the error is returned.
    pub async fn load(&mut self, source: &dyn MetadataSource) -> Result<(), ClientError> {
        match load_genres(source).await {
            Ok((movie, tv)) => {
                self.set_genre_lists(movie, tv);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error fetching genres");
                Err(e)
            }
        }
    }
}
