// Document Store Port (Interface)

use crate::domain::Item;
use crate::error::Result;
use std::path::PathBuf;

/// Whole-document persistence for the queue.
///
/// A store is bound to one location. Every call reads or writes the full
/// item sequence; there are no partial updates. Implementations provide no
/// locking: concurrent writers race and the last `save` wins.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore: Send + Sync {
    /// Resolved location of the backing document
    fn location(&self) -> PathBuf;

    /// Whether the backing document exists
    fn exists(&self) -> bool;

    /// Create parent directories and write an empty sequence,
    /// truncating anything already there.
    ///
    /// Fails with `StorageUnavailable` if the location cannot be created.
    fn initialize(&self) -> Result<()>;

    /// Read and validate the full sequence.
    ///
    /// Fails with `StoreNotFound` if the document does not exist and
    /// `CorruptStore` if it does not parse as a valid item sequence.
    fn load(&self) -> Result<Vec<Item>>;

    /// Replace the full sequence (all-or-nothing)
    fn save(&self, items: &[Item]) -> Result<()>;
}
