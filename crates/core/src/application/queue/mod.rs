// Queue Service - Core use cases for the file-backed deque
//
// Each operation is one load-mutate-store cycle against the document store.
// Nothing is cached between calls.

pub mod drop;
pub mod push;
pub mod setup;
pub mod show;

pub use drop::{DropOutcome, DropRequest};
pub use push::PushRequest;
pub use setup::SetupOutcome;
pub use show::{ShowOutcome, ShowRequest};

use crate::domain::{Item, ItemId};
use crate::error::Result;
use crate::port::{DocumentStore, IdAllocator, TimeProvider};
use std::sync::Arc;

/// Result of an id lookup (`show --id` / `drop --id`).
///
/// `NotFound` is a reported outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Item),
    NotFound { id: ItemId, size: usize },
}

/// Queue Service
pub struct QueueService {
    store: Arc<dyn DocumentStore>,
    id_allocator: Arc<dyn IdAllocator>,
    time_provider: Arc<dyn TimeProvider>,
}

impl QueueService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        id_allocator: Arc<dyn IdAllocator>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            store,
            id_allocator,
            time_provider,
        }
    }

    /// Create (or truncate) the backing document
    pub fn setup(&self) -> Result<SetupOutcome> {
        setup::execute(self.store.as_ref())
    }

    /// Insert a new item at the requested end
    pub fn push(&self, req: PushRequest) -> Result<Item> {
        push::execute(
            self.store.as_ref(),
            self.id_allocator.as_ref(),
            self.time_provider.as_ref(),
            req,
        )
    }

    /// Read a window of items (no mutation)
    pub fn show(&self, req: ShowRequest) -> Result<ShowOutcome> {
        show::execute(self.store.as_ref(), req)
    }

    /// Look up a single item by id (no mutation)
    pub fn show_by_id(&self, id: ItemId) -> Result<Lookup> {
        show::by_id(self.store.as_ref(), id)
    }

    /// Remove items from the requested end, or everything
    pub fn drop(&self, req: DropRequest) -> Result<DropOutcome> {
        drop::execute(self.store.as_ref(), req)
    }

    /// Remove a single item by id
    pub fn drop_by_id(&self, id: ItemId) -> Result<Lookup> {
        drop::by_id(self.store.as_ref(), id)
    }

    /// Replace the document with an empty sequence
    pub fn empty_all(&self) -> Result<DropOutcome> {
        drop::empty_all(self.store.as_ref())
    }
}
