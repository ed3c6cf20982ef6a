// Domain Layer - Pure business logic and entities

pub mod document;
pub mod error;
pub mod item;
pub mod queue;

// Re-exports
pub use error::DomainError;
pub use item::{Item, ItemId};
pub use queue::{End, Selection};
