use std::path::PathBuf;

use thiserror::Error;

use babykit_core::DomainError;

/// Failures of a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to (de)serialize value under key {key:?}: {source}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// The backend's lock was poisoned by a panicking writer.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors surfaced by `InventoryManager` operations that take user input.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type InventoryResult<T> = Result<T, InventoryError>;
