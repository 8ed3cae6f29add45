use catalog_models::{MediaItem, SortKey};
use std::cmp::Ordering;

/// Compare two items under `key`. Movies and shows compare on the same fields.
pub fn compare(a: &MediaItem, b: &MediaItem, key: SortKey) -> Ordering {
    match key {
        SortKey::PopularityDesc => b.popularity().total_cmp(&a.popularity()),
        SortKey::PopularityAsc => a.popularity().total_cmp(&b.popularity()),
        SortKey::VoteAverageDesc => b.vote_average().total_cmp(&a.vote_average()),
        SortKey::VoteAverageAsc => a.vote_average().total_cmp(&b.vote_average()),
        SortKey::ReleaseDateDesc => b.release_timestamp().cmp(&a.release_timestamp()),
        SortKey::ReleaseDateAsc => a.release_timestamp().cmp(&b.release_timestamp()),
        SortKey::TitleAsc => compare_titles(a.title(), b.title()),
        SortKey::TitleDesc => compare_titles(b.title(), a.title()),
    }
}

/// Case-insensitive first, so "alpha" and "Alpha" sit together; raw order breaks the tie.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Return a sorted copy of `items`. With no key the copy keeps the input order.
///
/// The sort is stable: items that compare equal keep their relative order.
pub fn sort_items(items: &[MediaItem], key: Option<SortKey>) -> Vec<MediaItem> {
    let mut sorted = items.to_vec();
    if let Some(key) = key {
        sorted.sort_by(|a, b| compare(a, b, key));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{movie, show};

    fn sample() -> Vec<MediaItem> {
        vec![
            movie(1, "Zeta", 40.0, "2018-03-01"),
            show(1, "alpha", 90.0, "2021-09-10"),
            movie(2, "Mid", 65.0, ""),
            show(2, "Beta", 12.5, "1999-12-31"),
            movie(3, "Alpha", 33.0, "2020-01-01"),
        ]
    }

    fn titles(items: &[MediaItem]) -> Vec<&str> {
        items.iter().map(|i| i.title()).collect()
    }

    #[test]
    fn test_sort_is_idempotent_for_every_key() {
        let items = sample();
        for key in SortKey::ALL {
            let once = sort_items(&items, Some(key));
            let twice = sort_items(&once, Some(key));
            assert_eq!(once, twice, "sort by {} not idempotent", key);
        }
    }

    #[test]
    fn test_popularity_desc_reversed_is_asc() {
        let items = sample();
        let mut desc = sort_items(&items, Some(SortKey::PopularityDesc));
        desc.reverse();
        assert_eq!(desc, sort_items(&items, Some(SortKey::PopularityAsc)));
    }

    #[test]
    fn test_release_date_desc_puts_empty_date_last() {
        let items = vec![
            movie(1, "New", 1.0, "2020-01-01"),
            movie(2, "Undated", 1.0, ""),
            show(3, "Older", 1.0, "2019-06-01"),
        ];
        let sorted = sort_items(&items, Some(SortKey::ReleaseDateDesc));
        assert_eq!(titles(&sorted), vec!["New", "Older", "Undated"]);

        let sorted = sort_items(&items, Some(SortKey::ReleaseDateAsc));
        assert_eq!(titles(&sorted), vec!["Undated", "Older", "New"]);
    }

    #[test]
    fn test_undated_sorts_before_pre_1970_dates() {
        let items = vec![
            movie(1, "Casablanca", 1.0, "1942-11-26"),
            movie(2, "Undated", 1.0, ""),
            movie(3, "Moonlight", 1.0, "2016-10-21"),
        ];
        let sorted = sort_items(&items, Some(SortKey::ReleaseDateDesc));
        assert_eq!(titles(&sorted), vec!["Moonlight", "Casablanca", "Undated"]);

        let sorted = sort_items(&items, Some(SortKey::ReleaseDateAsc));
        assert_eq!(titles(&sorted), vec!["Undated", "Casablanca", "Moonlight"]);
    }

    #[test]
    fn test_title_sort_mixes_movies_and_shows() {
        let items = vec![movie(1, "Zeta", 1.0, ""), show(1, "Alpha", 1.0, "")];
        let sorted = sort_items(&items, Some(SortKey::TitleAsc));
        assert_eq!(titles(&sorted), vec!["Alpha", "Zeta"]);

        let sorted = sort_items(&items, Some(SortKey::TitleDesc));
        assert_eq!(titles(&sorted), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let sorted = sort_items(&sample(), Some(SortKey::TitleAsc));
        assert_eq!(titles(&sorted), vec!["Alpha", "alpha", "Beta", "Mid", "Zeta"]);
    }

    #[test]
    fn test_vote_average_desc() {
        let sorted = sort_items(&sample(), Some(SortKey::VoteAverageDesc));
        assert_eq!(sorted[0].title(), "alpha");
        assert_eq!(sorted[4].title(), "Beta");
    }

    #[test]
    fn test_no_key_keeps_order() {
        let items = sample();
        assert_eq!(sort_items(&items, None), items);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            movie(1, "First", 10.0, ""),
            show(1, "Second", 10.0, ""),
            movie(2, "Third", 10.0, ""),
        ];
        let sorted = sort_items(&items, Some(SortKey::PopularityDesc));
        assert_eq!(titles(&sorted), vec!["First", "Second", "Third"]);
    }
}
