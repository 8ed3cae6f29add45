use catalog_models::{MediaItem, MediaKey};

/// The list a detail view was opened from, plus the position within it.
///
/// Moving past either end is a no-op; the index never leaves `0..len`.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationContext {
    items: Vec<MediaItem>,
    index: usize,
}

impl NavigationContext {
    pub fn new(items: Vec<MediaItem>, index: usize) -> Option<Self> {
        if index < items.len() {
            Some(Self { items, index })
        } else {
            None
        }
    }

    /// Context positioned on the item with `key`, if it is in the list.
    pub fn for_key(items: Vec<MediaItem>, key: MediaKey) -> Option<Self> {
        let index = items.iter().position(|item| item.key() == key)?;
        Some(Self { items, index })
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> &MediaItem {
        &self.items[self.index]
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.items.len()
    }

    /// Step forward; `None` (and no movement) at the last item.
    pub fn next(&mut self) -> Option<&MediaItem> {
        if !self.has_next() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// Step back; `None` (and no movement) at the first item.
    pub fn prev(&mut self) -> Option<&MediaItem> {
        if !self.has_prev() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// One-based "i of n".
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.index + 1, self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{movie, show};
    use catalog_models::MediaType;

    fn items() -> Vec<MediaItem> {
        vec![movie(1, "One", 1.0, ""), show(1, "Two", 1.0, ""), movie(3, "Three", 1.0, "")]
    }

    #[test]
    fn test_next_from_last_is_noop() {
        let mut nav = NavigationContext::new(items(), 2).unwrap();
        assert!(nav.next().is_none());
        assert_eq!(nav.index(), 2);
        assert_eq!(nav.position_label(), "3 of 3");
    }

    #[test]
    fn test_prev_from_first_is_noop() {
        let mut nav = NavigationContext::new(items(), 0).unwrap();
        assert!(!nav.has_prev());
        assert!(nav.prev().is_none());
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn test_walk_forward_and_back() {
        let mut nav = NavigationContext::new(items(), 0).unwrap();
        assert_eq!(nav.next().unwrap().title(), "Two");
        assert_eq!(nav.next().unwrap().title(), "Three");
        assert_eq!(nav.prev().unwrap().title(), "Two");
        assert_eq!(nav.position_label(), "2 of 3");
    }

    #[test]
    fn test_for_key_respects_media_type() {
        let nav = NavigationContext::for_key(items(), MediaKey { media_type: MediaType::Tv, id: 1 }).unwrap();
        assert_eq!(nav.index(), 1);
        assert_eq!(nav.current().title(), "Two");

        assert!(NavigationContext::for_key(items(), MediaKey { media_type: MediaType::Tv, id: 3 }).is_none());
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        assert!(NavigationContext::new(items(), 3).is_none());
        assert!(NavigationContext::new(Vec::new(), 0).is_none());
    }
}
