use catalog_models::{MediaItem, Page};

/// Concatenate result pages in the order given, keeping each page's own order.
///
/// A missing page contributes nothing. Items are not de-duplicated.
pub fn concat_pages<I>(pages: I) -> Vec<MediaItem>
where
    I: IntoIterator<Item = Option<Page<MediaItem>>>,
{
    pages
        .into_iter()
        .flatten()
        .flat_map(|page| page.results)
        .collect()
}

/// Merge a movie discover page and a TV discover page: movies first, then shows.
pub fn merge_discover(movies: Option<Page<MediaItem>>, shows: Option<Page<MediaItem>>) -> Vec<MediaItem> {
    concat_pages([movies, shows])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{movie, page_of, show};

    #[test]
    fn test_empty_movies_and_three_shows() {
        let shows = page_of(vec![show(1, "A", 1.0, "2020-01-01"), show(2, "B", 2.0, ""), show(3, "C", 3.0, "")]);
        let merged = merge_discover(Some(Page::empty()), Some(shows));
        let titles: Vec<&str> = merged.iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_movies_before_shows() {
        let movies = page_of(vec![movie(10, "Movie", 1.0, "")]);
        let shows = page_of(vec![show(10, "Show", 9.0, "")]);
        let merged = merge_discover(Some(movies), Some(shows));
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].title(), "Movie");
        assert_eq!(merged[1].title(), "Show");
    }

    #[test]
    fn test_missing_pages() {
        assert!(merge_discover(None, None).is_empty());
        assert!(concat_pages(Vec::<Option<Page<MediaItem>>>::new()).is_empty());

        let only = concat_pages([None, Some(page_of(vec![movie(1, "Solo", 1.0, "")]))]);
        assert_eq!(only.len(), 1);
    }
}
