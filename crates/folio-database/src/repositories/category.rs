//! Category repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_entity::{Category, CreateCategory};

use crate::store::CategoryStore;

/// Repository for portfolio categories.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    async fn list(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, description, created_at FROM categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))
    }

    async fn create(&self, category: CreateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, description) VALUES ($1, $2) \
             RETURNING id, name, description, created_at",
        )
        .bind(&category.name)
        .bind(&category.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            super::map_write_error(
                e,
                "Failed to create category",
                "Category already exists",
                "Referenced record not found",
            )
        })
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
