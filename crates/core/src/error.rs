// Central Error Type for the Application

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Queue store not found at {}; run `deq setup` first", .path.display())]
    StoreNotFound { path: PathBuf },

    #[error("Queue store unavailable at {}: {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("Queue store at {} is corrupt: {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// True for input errors rejected before the store is touched
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::Domain(
                crate::domain::DomainError::InvalidContent
                    | crate::domain::DomainError::InvalidSelection(_)
            )
        )
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
