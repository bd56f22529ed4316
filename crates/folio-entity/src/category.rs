//! Portfolio category model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category grouping portfolio content.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: i32,
    /// Unique display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}
