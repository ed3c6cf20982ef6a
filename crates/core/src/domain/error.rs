// Domain Error Types

use super::item::ItemId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Item content must not be blank")]
    InvalidContent,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),

    #[error("Item id must be a positive integer")]
    ZeroId,

    #[error("Item {0} has blank content")]
    BlankContent(ItemId),

    #[error("No ids left above {0}")]
    IdExhausted(ItemId),
}

pub type Result<T> = std::result::Result<T, DomainError>;
