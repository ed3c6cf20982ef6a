// Show Use Case (read-only)

use super::Lookup;
use crate::domain::{document, End, Item, ItemId, Selection};
use crate::error::Result;
use crate::port::DocumentStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Show request: `count` items from `end`, or everything when `all` is set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowRequest {
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

impl Default for ShowRequest {
    fn default() -> Self {
        Self {
            end: End::default(),
            count: default_count(),
            all: false,
        }
    }
}

/// Show result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowOutcome {
    /// The document holds no items
    Empty,
    /// Selected items, closest to the selected end first
    Items(Vec<Item>),
}

/// Execute show use case
pub fn execute(store: &dyn DocumentStore, req: ShowRequest) -> Result<ShowOutcome> {
    let selection = Selection::new(req.end, req.count, req.all)?;

    let items = store.load()?;
    if items.is_empty() {
        debug!("Show on empty queue");
        return Ok(ShowOutcome::Empty);
    }

    let selected = selection.pick(&items);
    debug!(
        end = %req.end,
        selected = selected.len(),
        size = items.len(),
        "Items selected"
    );
    Ok(ShowOutcome::Items(selected))
}

/// Execute show-by-id use case
pub fn by_id(store: &dyn DocumentStore, id: ItemId) -> Result<Lookup> {
    let items = store.load()?;

    match document::position_of(&items, id) {
        Some(index) => Ok(Lookup::Found(items[index].clone())),
        None => {
            debug!(id = %id, size = items.len(), "Item not found");
            Ok(Lookup::NotFound {
                id,
                size: items.len(),
            })
        }
    }
}
