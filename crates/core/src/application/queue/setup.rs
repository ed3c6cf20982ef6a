// Setup Use Case

use crate::error::Result;
use crate::port::DocumentStore;
use std::path::PathBuf;
use tracing::info;

/// Setup result: where the empty document was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOutcome {
    pub path: PathBuf,
}

/// Execute setup use case.
///
/// Always truncates: running it against an existing queue erases the items.
pub fn execute(store: &dyn DocumentStore) -> Result<SetupOutcome> {
    let path = store.location();
    let existed = store.exists();

    store.initialize()?;

    info!(path = %path.display(), reinitialized = existed, "Queue store initialized");
    Ok(SetupOutcome { path })
}
