pub mod aggregate;
pub mod detail;
pub mod filter;
pub mod gallery;
pub mod navigation;
pub mod request;
pub mod route;
pub mod search;
pub mod sort;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregate::{concat_pages, merge_discover};
pub use detail::DetailController;
pub use filter::{available_genres, load_genres, FilterState};
pub use gallery::GalleryController;
pub use navigation::NavigationContext;
pub use request::{RequestToken, RequestTracker};
pub use route::{Route, RouteError, SearchRoute};
pub use search::SearchController;
pub use sort::{compare, sort_items};
pub use view::LoadState;
