//! Uploaded CV file metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Metadata for an uploaded CV. The bytes live in upload storage.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CvFile {
    /// Unique record identifier.
    pub id: i32,
    /// File name as supplied by the uploader.
    pub original_name: String,
    /// Path relative to the storage root.
    #[serde(skip_serializing)]
    pub stored_path: String,
    /// MIME type served on download.
    pub content_type: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Upload time.
    pub uploaded_at: DateTime<Utc>,
}

/// Data required to record a new CV upload.
#[derive(Debug, Clone)]
pub struct CreateCvFile {
    /// File name as supplied by the uploader.
    pub original_name: String,
    /// Path relative to the storage root.
    pub stored_path: String,
    /// MIME type.
    pub content_type: String,
    /// Size in bytes.
    pub size_bytes: i64,
}
