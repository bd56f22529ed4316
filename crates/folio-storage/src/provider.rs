//! Storage provider contract.

use async_trait::async_trait;
use bytes::Bytes;

use folio_core::result::AppResult;

/// A backend that stores whole files under relative paths.
#[async_trait]
pub trait StorageProvider: Send + Sync + 'static {
    /// Whether the backend is reachable and writable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a whole file. A missing file is a not-found error.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Write a whole file, creating parent directories as needed.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete a file. Returns `false` if it did not exist.
    async fn delete(&self, path: &str) -> AppResult<bool>;
}
