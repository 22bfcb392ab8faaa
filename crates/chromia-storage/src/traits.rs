//! Storage abstraction trait

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Temporary upload storage.
///
/// Files are addressed by key. The analyzer reads them back through the
/// filesystem path returned by [`Storage::store`].
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `storage_key` and return the path of the written file
    async fn store(&self, storage_key: &str, data: &[u8]) -> StorageResult<PathBuf>;

    /// Delete a file by its storage key. Deleting a missing file succeeds.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if a file exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;
}
