// Push Use Case

use crate::domain::document;
use crate::domain::{DomainError, End, Item};
use crate::error::Result;
use crate::port::{DocumentStore, IdAllocator, TimeProvider};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Push request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushRequest {
    pub content: String,

    #[serde(default)]
    pub end: End,
}

impl PushRequest {
    pub fn new(content: impl Into<String>, end: End) -> Self {
        Self {
            content: content.into(),
            end,
        }
    }
}

/// Execute push use case
///
/// # Arguments
///
/// * `store` - Document store
/// * `id_allocator` - Id policy (injected for determinism)
/// * `time_provider` - Clock (injected for determinism)
/// * `req` - Push request
pub fn execute(
    store: &dyn DocumentStore,
    id_allocator: &dyn IdAllocator,
    time_provider: &dyn TimeProvider,
    req: PushRequest,
) -> Result<Item> {
    // Blank content is rejected before touching the store
    if !document::is_valid_content(&req.content) {
        return Err(DomainError::InvalidContent.into());
    }

    let mut items = store.load()?;

    let id = id_allocator.next_id(&items)?;
    let item = Item::new(id, req.content, time_provider.now());

    match req.end {
        End::Head => items.insert(0, item.clone()),
        End::Tail => items.push(item.clone()),
    }

    store.save(&items)?;

    info!(id = %item.id, end = %req.end, size = items.len(), "Item pushed");
    Ok(item)
}
