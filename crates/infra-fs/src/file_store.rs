// JSON File DocumentStore Implementation

use crate::atomic_write::write_json_atomic;
use deq_core::domain::{document, Item};
use deq_core::error::{AppError, Result};
use deq_core::port::DocumentStore;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

// Helper to map setup failures to StorageUnavailable with the io reason
fn storage_unavailable(path: &Path, err: impl std::fmt::Display) -> AppError {
    AppError::StorageUnavailable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

fn corrupt(path: &Path, reason: impl std::fmt::Display) -> AppError {
    let reason = reason.to_string();
    debug!(path = %path.display(), reason = %reason, "Queue store failed validation");
    AppError::CorruptStore {
        path: path.to_path_buf(),
        reason,
    }
}

/// Queue document stored as a pretty-printed JSON array in one file.
///
/// No file locking: two processes saving at once race and the last rename
/// wins. Each individual save is atomic.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// `path` should already be absolute; resolution is the caller's job
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn location(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| storage_unavailable(&self.path, e))?;
            }
        }

        write_json_atomic(&self.path, &[] as &[Item])
            .map_err(|e| storage_unavailable(&self.path, e))?;

        debug!(path = %self.path.display(), "Empty document written");
        Ok(())
    }

    fn load(&self) -> Result<Vec<Item>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::StoreNotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let items: Vec<Item> = serde_json::from_str(&raw).map_err(|e| corrupt(&self.path, e))?;
        document::validate(&items).map_err(|e| corrupt(&self.path, e))?;

        debug!(path = %self.path.display(), size = items.len(), "Document loaded");
        Ok(items)
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        write_json_atomic(&self.path, items)?;

        debug!(path = %self.path.display(), size = items.len(), "Document saved");
        Ok(())
    }
}
