// Queue Domain Model - ends and selection windows

use super::error::{DomainError, Result};
use super::item::Item;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::ops::Range;

/// End of the queue an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum End {
    /// Index 0 (oldest unless items were pushed to the head)
    Head,
    /// Last index
    #[default]
    Tail,
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            End::Head => write!(f, "head"),
            End::Tail => write!(f, "tail"),
        }
    }
}

/// Position-based selection: `limit` items counted from `end`, or the whole
/// document when `limit` is `None`.
///
/// Selected items are always reported closest-to-`end` first, so a tail
/// selection comes out newest-first and a head selection in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    end: End,
    limit: Option<NonZeroUsize>,
}

impl Selection {
    /// Build a selection from raw dispatcher options.
    ///
    /// `count` must be at least 1 even when `all` is set; it is validated
    /// before any store access.
    pub fn new(end: End, count: usize, all: bool) -> Result<Self> {
        let count = NonZeroUsize::new(count).ok_or_else(|| {
            DomainError::InvalidSelection(format!(
                "count must be a positive integer, got {}",
                count
            ))
        })?;

        Ok(Self {
            end,
            limit: if all { None } else { Some(count) },
        })
    }

    /// Select every item
    pub fn all(end: End) -> Self {
        Self { end, limit: None }
    }

    pub fn is_all(&self) -> bool {
        self.limit.is_none()
    }

    /// Index range of the window in a document of `len` items.
    ///
    /// Tail: `[max(0, len - count), len)`, head: `[0, min(count, len))`.
    /// Always within bounds; a count larger than `len` clamps to the whole
    /// document.
    pub fn range(&self, len: usize) -> Range<usize> {
        let Some(count) = self.limit.map(NonZeroUsize::get) else {
            return 0..len;
        };

        match self.end {
            End::Head => 0..count.min(len),
            End::Tail => len.saturating_sub(count)..len,
        }
    }

    /// Copy of the selected items, closest-to-end first
    pub fn pick(&self, items: &[Item]) -> Vec<Item> {
        let window = &items[self.range(items.len())];
        match self.end {
            End::Head => window.to_vec(),
            End::Tail => window.iter().rev().cloned().collect(),
        }
    }

    /// Remove the selected items from `items`, returning them closest-to-end
    /// first. The order of the remaining items is preserved.
    pub fn take(&self, items: &mut Vec<Item>) -> Vec<Item> {
        let range = self.range(items.len());
        let removed = items.drain(range);
        match self.end {
            End::Head => removed.collect(),
            End::Tail => removed.rev().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::ItemId;
    use chrono::Utc;
    use proptest::prelude::*;

    fn items(n: u64) -> Vec<Item> {
        (1..=n)
            .map(|i| Item::new(ItemId::new(i), format!("item {}", i), Utc::now()))
            .collect()
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|i| i.id.get()).collect()
    }

    #[test]
    fn test_zero_count_rejected() {
        let err = Selection::new(End::Tail, 0, false).unwrap_err();
        assert!(matches!(err, DomainError::InvalidSelection(_)));
        assert!(Selection::new(End::Head, 0, true).is_err());
    }

    #[test]
    fn test_default_end_is_tail() {
        assert_eq!(End::default(), End::Tail);
    }

    #[test]
    fn test_tail_window_newest_first() {
        let doc = items(5);
        let sel = Selection::new(End::Tail, 2, false).unwrap();

        assert_eq!(sel.range(5), 3..5);
        assert_eq!(ids(&sel.pick(&doc)), vec![5, 4]);
    }

    #[test]
    fn test_head_window_document_order() {
        let doc = items(5);
        let sel = Selection::new(End::Head, 2, false).unwrap();

        assert_eq!(sel.range(5), 0..2);
        assert_eq!(ids(&sel.pick(&doc)), vec![1, 2]);
    }

    #[test]
    fn test_count_larger_than_document_clamps() {
        let doc = items(3);

        let tail = Selection::new(End::Tail, 10, false).unwrap();
        assert_eq!(tail.range(3), 0..3);
        assert_eq!(ids(&tail.pick(&doc)), vec![3, 2, 1]);

        let head = Selection::new(End::Head, 10, false).unwrap();
        assert_eq!(head.range(3), 0..3);
        assert_eq!(ids(&head.pick(&doc)), vec![1, 2, 3]);
    }

    #[test]
    fn test_all_ignores_count() {
        let doc = items(4);
        let sel = Selection::new(End::Tail, 1, true).unwrap();

        assert!(sel.is_all());
        assert_eq!(ids(&sel.pick(&doc)), vec![4, 3, 2, 1]);
        assert_eq!(ids(&Selection::all(End::Head).pick(&doc)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_take_preserves_remaining_order() {
        let mut doc = items(5);
        let removed = Selection::new(End::Tail, 2, false).unwrap().take(&mut doc);

        assert_eq!(ids(&removed), vec![5, 4]);
        assert_eq!(ids(&doc), vec![1, 2, 3]);

        let removed = Selection::new(End::Head, 1, false).unwrap().take(&mut doc);
        assert_eq!(ids(&removed), vec![1]);
        assert_eq!(ids(&doc), vec![2, 3]);
    }

    #[test]
    fn test_empty_document() {
        let sel = Selection::new(End::Tail, 3, false).unwrap();
        assert_eq!(sel.range(0), 0..0);
        assert!(sel.pick(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_range_in_bounds(len in 0usize..200, count in 1usize..300, head in any::<bool>()) {
            let end = if head { End::Head } else { End::Tail };
            let range = Selection::new(end, count, false).unwrap().range(len);

            prop_assert!(range.start <= range.end);
            prop_assert!(range.end <= len);
            prop_assert_eq!(range.len(), count.min(len));
            match end {
                End::Head => {
                    prop_assert_eq!(range.start, 0);
                }
                End::Tail => {
                    prop_assert_eq!(range.end, len);
                }
            }
        }
    }
}
