//! Typed path parameter extractor.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use folio_core::error::AppError;

use crate::error::ApiError;

/// A positive integer record id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        Ok(Self(parse_id(&raw)?))
    }
}

/// Parses a record id from a path segment.
pub fn parse_id(s: &str) -> Result<i32, AppError> {
    s.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::validation(format!("Invalid id: {s}")))
}
