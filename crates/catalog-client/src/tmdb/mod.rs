pub mod api;
pub mod client;

pub use api::{image_url, CARD_IMAGE_SIZE, DETAIL_IMAGE_SIZE};
pub use client::TmdbClient;
