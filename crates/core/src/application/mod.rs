// Application Layer - Use Cases

pub mod queue;

// Re-exports
pub use queue::{
    DropOutcome, DropRequest, Lookup, PushRequest, QueueService, SetupOutcome, ShowOutcome,
    ShowRequest,
};
