//! Store contracts used by the auth core and the HTTP handlers.
//!
//! Postgres repositories in [`crate::repositories`] and the
//! [`crate::memory::MemoryStore`] implement these traits.

use async_trait::async_trait;

use folio_core::result::AppResult;
use folio_entity::{
    Category, CreateCategory, CreateCvFile, CreateFolder, CreateUser, CvFile, DocumentFolder,
    User,
};

/// Liveness of the backing store, reported by the health endpoint.
#[async_trait]
pub trait StoreHealth: Send + Sync + 'static {
    /// Whether the store answers a trivial query. Connectivity failures
    /// are reported as `false`, not as errors.
    async fn ping(&self) -> AppResult<bool>;
}

/// Read and create access to user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a user. A duplicate username is a conflict.
    async fn create(&self, user: CreateUser) -> AppResult<User>;
}

/// Category persistence.
#[async_trait]
pub trait CategoryStore: Send + Sync + 'static {
    /// All categories ordered by name.
    async fn list(&self) -> AppResult<Vec<Category>>;

    /// Insert a category. A duplicate name is a conflict.
    async fn create(&self, category: CreateCategory) -> AppResult<Category>;

    /// Delete a category. Returns `true` if a row was removed.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Document folder persistence.
#[async_trait]
pub trait FolderStore: Send + Sync + 'static {
    /// Folders ordered by name, optionally restricted to one category.
    async fn list(&self, category_id: Option<i32>) -> AppResult<Vec<DocumentFolder>>;

    /// Insert a folder. An unknown category is a not-found error.
    async fn create(&self, folder: CreateFolder) -> AppResult<DocumentFolder>;

    /// Delete a folder. Returns `true` if a row was removed.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// CV upload metadata persistence.
#[async_trait]
pub trait CvStore: Send + Sync + 'static {
    /// All uploads, newest first.
    async fn list(&self) -> AppResult<Vec<CvFile>>;

    /// The most recent upload, if any.
    async fn latest(&self) -> AppResult<Option<CvFile>>;

    /// Record a new upload.
    async fn create(&self, cv: CreateCvFile) -> AppResult<CvFile>;
}
