//! Response DTOs.

use serde::{Deserialize, Serialize};

use folio_auth::Claims;
use folio_entity::UserSummary;

/// Standard API success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Always `true`.
    pub success: bool,
    /// Signed session token.
    pub token: String,
    /// The authenticated user.
    pub user: UserSummary,
}

/// Body of a successful token verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Always `true`.
    pub success: bool,
    /// Decoded token claims.
    pub decoded: Claims,
}

/// Body of `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Always `true`.
    pub success: bool,
    /// The caller's account.
    pub user: UserSummary,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when every backend is reachable, `degraded` otherwise.
    pub status: String,
    /// Application version.
    pub version: String,
    /// Database reachable.
    pub database: bool,
    /// Upload storage backend reachable.
    pub storage: bool,
}
