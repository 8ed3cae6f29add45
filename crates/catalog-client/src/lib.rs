pub mod error;
pub mod tmdb;
pub mod traits;

pub use error::ClientError;
pub use tmdb::{image_url, TmdbClient, CARD_IMAGE_SIZE, DETAIL_IMAGE_SIZE};
pub use traits::{DiscoverParams, MetadataSource};
