pub mod details;
pub mod filter;
pub mod genre;
pub mod media;
pub mod page;
pub mod sort_key;

pub use details::{MediaDetails, MovieDetails, TvShowDetails};
pub use filter::{MediaFilter, TimeWindow};
pub use genre::{Genre, GenreId};
pub use media::{MediaItem, MediaKey, MediaType, Movie, TvShow};
pub use page::Page;
pub use sort_key::SortKey;
