//! `AuthUser` extractor: the bearer-token gate in front of protected routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use tracing::debug;

use folio_auth::Claims;
use folio_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejection message when no usable bearer token is present.
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Rejection message when a token is present but fails verification.
pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// Identity of a caller whose session token verified.
///
/// Adding this extractor to a handler's arguments gates the route: the
/// handler body only runs once the token has been checked.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Authenticated user id from the token.
    pub user_id: i32,
    /// Full verified claims.
    pub claims: Claims,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    debug!(reason = %rejection, "Missing bearer token");
                    AppError::authentication(UNAUTHORIZED)
                })?;

        let token = bearer.token().trim();
        if token.is_empty() {
            return Err(AppError::authentication(UNAUTHORIZED).into());
        }

        let claims = state
            .tokens
            .verify_token(token)
            .ok_or_else(|| AppError::authentication(INVALID_TOKEN))?;

        Ok(AuthUser {
            user_id: claims.user_id,
            claims,
        })
    }
}
