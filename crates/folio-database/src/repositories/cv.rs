//! CV upload metadata repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_entity::{CreateCvFile, CvFile};

use crate::store::CvStore;

const COLUMNS: &str = "id, original_name, stored_path, content_type, size_bytes, uploaded_at";

/// Repository for CV upload records.
#[derive(Debug, Clone)]
pub struct CvRepository {
    pool: PgPool,
}

impl CvRepository {
    /// Create a new CV repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CvStore for CvRepository {
    async fn list(&self) -> AppResult<Vec<CvFile>> {
        sqlx::query_as::<_, CvFile>(&format!(
            "SELECT {COLUMNS} FROM cv_files ORDER BY uploaded_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list CV files", e))
    }

    async fn latest(&self) -> AppResult<Option<CvFile>> {
        sqlx::query_as::<_, CvFile>(&format!(
            "SELECT {COLUMNS} FROM cv_files ORDER BY uploaded_at DESC, id DESC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find latest CV", e))
    }

    async fn create(&self, cv: CreateCvFile) -> AppResult<CvFile> {
        sqlx::query_as::<_, CvFile>(&format!(
            "INSERT INTO cv_files (original_name, stored_path, content_type, size_bytes) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&cv.original_name)
        .bind(&cv.stored_path)
        .bind(&cv.content_type)
        .bind(cv.size_bytes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record CV upload", e))
    }
}
