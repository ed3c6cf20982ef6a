// ID Allocator Port (for deterministic testing)

use crate::domain::error::Result;
use crate::domain::{DomainError, Item, ItemId};

/// Id allocation policy
pub trait IdAllocator: Send + Sync {
    /// Next unique id for a document currently holding `items`
    fn next_id(&self, items: &[Item]) -> Result<ItemId>;
}

/// Max-plus-one over the current document (production).
///
/// No counter is persisted: ids are recomputed from whatever is in the
/// document, so dropping the highest id lets the next push reuse it.
pub struct RescanIdAllocator;

impl IdAllocator for RescanIdAllocator {
    fn next_id(&self, items: &[Item]) -> Result<ItemId> {
        next_id(items)
    }
}

/// `max(id) + 1`, or `1` for an empty document.
///
/// Fails with `IdExhausted` when the document already holds `u64::MAX`.
pub fn next_id(items: &[Item]) -> Result<ItemId> {
    let max = items.iter().map(|item| item.id.get()).max().unwrap_or(0);
    max.checked_add(1)
        .map(ItemId::new)
        .ok_or(DomainError::IdExhausted(ItemId::new(max)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::collection::hash_set;
    use proptest::prelude::*;

    fn doc(ids: &[u64]) -> Vec<Item> {
        ids.iter()
            .map(|&id| Item::new(ItemId::new(id), "x", Utc::now()))
            .collect()
    }

    #[test]
    fn test_empty_document_starts_at_one() {
        assert_eq!(next_id(&[]), Ok(ItemId::new(1)));
    }

    #[test]
    fn test_uses_max_not_len() {
        assert_eq!(next_id(&doc(&[1, 2, 3])), Ok(ItemId::new(4)));
        assert_eq!(next_id(&doc(&[9, 2])), Ok(ItemId::new(10)));
        assert_eq!(next_id(&doc(&[5])), Ok(ItemId::new(6)));
    }

    #[test]
    fn test_reuses_range_after_dropping_max() {
        let mut items = doc(&[1, 2, 1000]);
        assert_eq!(next_id(&items), Ok(ItemId::new(1001)));

        items.pop();
        assert_eq!(next_id(&items), Ok(ItemId::new(3)));
    }

    #[test]
    fn test_max_id_is_exhausted() {
        let err = next_id(&doc(&[3, u64::MAX])).unwrap_err();
        assert_eq!(err, DomainError::IdExhausted(ItemId::new(u64::MAX)));

        assert_eq!(next_id(&doc(&[u64::MAX - 1])), Ok(ItemId::new(u64::MAX)));
    }

    #[test]
    fn test_trait_matches_free_function() {
        let items = doc(&[4, 8]);
        assert_eq!(RescanIdAllocator.next_id(&items), next_id(&items));
    }

    proptest! {
        #[test]
        fn prop_next_id_is_fresh(ids in hash_set(1u64..10_000, 0..50)) {
            let ids: Vec<u64> = ids.into_iter().collect();
            let items = doc(&ids);
            let next = next_id(&items).unwrap();

            prop_assert!(ids.iter().all(|&id| next.get() > id));
            prop_assert!(!ids.contains(&next.get()));
        }
    }
}
