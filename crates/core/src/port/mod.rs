// Port Layer - Interfaces for external dependencies

pub mod document_store;
pub mod id_allocator;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use document_store::DocumentStore;
pub use id_allocator::{next_id, IdAllocator, RescanIdAllocator};
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
