//! Document folder model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A folder grouping downloadable documents, optionally under a category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentFolder {
    /// Unique folder identifier.
    pub id: i32,
    /// Folder name.
    pub name: String,
    /// Owning category, if any.
    pub category_id: Option<i32>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
    /// Owning category, if any.
    pub category_id: Option<i32>,
}
