//! Request DTOs with validation.

use serde::Deserialize;
use validator::Validate;

/// Message for a login body missing either field.
pub const MISSING_CREDENTIALS: &str = "Username and password are required";

/// Login request body.
///
/// Absent fields deserialize as empty strings so that they reach the
/// validation step instead of failing JSON parsing.
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,
    /// Plaintext password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Token verification request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyTokenRequest {
    /// The session token to check.
    #[serde(default)]
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
}

/// Create category request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Category name.
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: String,
    /// Optional description.
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Create folder request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Folder name must be 1-100 characters"))]
    pub name: String,
    /// Category to file the folder under.
    pub category_id: Option<i32>,
}

/// Query parameters for listing folders.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderQuery {
    /// Restrict to one category.
    pub category_id: Option<i32>,
}
