//! Document folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_entity::{CreateFolder, DocumentFolder};

use crate::store::FolderStore;

/// Repository for document folders.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn list(&self, category_id: Option<i32>) -> AppResult<Vec<DocumentFolder>> {
        sqlx::query_as::<_, DocumentFolder>(
            "SELECT id, name, category_id, created_at FROM document_folders \
             WHERE $1::INT IS NULL OR category_id = $1 ORDER BY name ASC",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn create(&self, folder: CreateFolder) -> AppResult<DocumentFolder> {
        sqlx::query_as::<_, DocumentFolder>(
            "INSERT INTO document_folders (name, category_id) VALUES ($1, $2) \
             RETURNING id, name, category_id, created_at",
        )
        .bind(&folder.name)
        .bind(folder.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            super::map_write_error(
                e,
                "Failed to create folder",
                "Folder already exists",
                "Category not found",
            )
        })
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM document_folders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete folder", e))?;
        Ok(result.rows_affected() > 0)
    }
}
