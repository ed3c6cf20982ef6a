// Drop Use Case

use super::Lookup;
use crate::domain::{document, End, Item, ItemId, Selection};
use crate::error::Result;
use crate::port::DocumentStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Drop request: `count` items from `end` (default one), or everything when
/// `all` is set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropRequest {
    #[serde(default)]
    pub end: End,

    #[serde(default = "default_count")]
    pub count: usize,

    #[serde(default)]
    pub all: bool,
}

fn default_count() -> usize {
    1
}

impl Default for DropRequest {
    fn default() -> Self {
        Self {
            end: End::default(),
            count: default_count(),
            all: false,
        }
    }
}

/// Drop result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing to drop; no write was performed
    EmptyQueue,
    /// The whole document was cleared
    Emptied { removed: usize },
    /// Removed items, closest to the selected end first
    Dropped(Vec<Item>),
}

/// Execute drop use case
pub fn execute(store: &dyn DocumentStore, req: DropRequest) -> Result<DropOutcome> {
    let selection = Selection::new(req.end, req.count, req.all)?;

    if selection.is_all() {
        return empty_all(store);
    }

    let mut items = store.load()?;
    if items.is_empty() {
        debug!(end = %req.end, "Drop on empty queue");
        return Ok(DropOutcome::EmptyQueue);
    }

    let removed = selection.take(&mut items);
    store.save(&items)?;

    info!(
        end = %req.end,
        removed = removed.len(),
        size = items.len(),
        "Items dropped"
    );
    Ok(DropOutcome::Dropped(removed))
}

/// Execute drop-by-id use case
pub fn by_id(store: &dyn DocumentStore, id: ItemId) -> Result<Lookup> {
    let mut items = store.load()?;

    let Some(index) = document::position_of(&items, id) else {
        debug!(id = %id, size = items.len(), "Item not found");
        return Ok(Lookup::NotFound {
            id,
            size: items.len(),
        });
    };

    let item = items.remove(index);
    store.save(&items)?;

    info!(id = %id, size = items.len(), "Item dropped");
    Ok(Lookup::Found(item))
}

/// Execute empty-all use case
pub fn empty_all(store: &dyn DocumentStore) -> Result<DropOutcome> {
    let removed = store.load()?.len();
    store.save(&[])?;

    info!(removed, "Queue emptied");
    Ok(DropOutcome::Emptied { removed })
}

