//! Authentication handlers: login, token verification, current user.

use axum::Json;
use axum::extract::State;
use tracing::info;

use folio_core::error::AppError;

use crate::dto::request::{LoginRequest, VerifyTokenRequest};
use crate::dto::response::{LoginResponse, MeResponse, VerifyResponse};
use crate::error::ApiError;
use crate::extractors::auth::{AuthUser, INVALID_TOKEN, UNAUTHORIZED};
use crate::extractors::json::ValidatedJson;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .credentials
        .authenticate(&req.username, &req.password)
        .await?;
    let token = state.tokens.issue_token(user.id)?;

    info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        token,
        user: user.summary(),
    }))
}

/// POST /api/auth/verify
pub async fn verify(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<VerifyTokenRequest>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let decoded = state
        .tokens
        .verify_token(req.token.trim())
        .ok_or_else(|| AppError::authentication(INVALID_TOKEN))?;

    Ok(Json(VerifyResponse {
        success: true,
        decoded,
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    // A valid token can outlive its account.
    let user = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::authentication(UNAUTHORIZED))?;

    Ok(Json(MeResponse {
        success: true,
        user: user.summary(),
    }))
}
