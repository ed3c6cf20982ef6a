// Document rules - invariants over the whole item sequence

use super::error::{DomainError, Result};
use super::item::{Item, ItemId};
use std::collections::HashSet;

/// Check the invariants a loaded document must satisfy:
/// every id is positive and unique, and no content is blank.
pub fn validate(items: &[Item]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.id.get() == 0 {
            return Err(DomainError::ZeroId);
        }
        if !seen.insert(item.id) {
            return Err(DomainError::DuplicateId(item.id));
        }
        if !is_valid_content(&item.content) {
            return Err(DomainError::BlankContent(item.id));
        }
    }
    Ok(())
}

/// Index of the item with `id` (linear scan)
pub fn position_of(items: &[Item], id: ItemId) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

/// True if `content` has at least one non-whitespace character
pub fn is_valid_content(content: &str) -> bool {
    !content.trim().is_empty()
}
