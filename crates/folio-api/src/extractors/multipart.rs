//! Multipart body extractor and error mapping.

use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::StatusCode;

use folio_core::error::AppError;

use crate::error::ApiError;

/// Message returned when an upload exceeds the body limit.
pub const UPLOAD_TOO_LARGE: &str = "Uploaded file exceeds the size limit";

/// A `multipart/form-data` body. A request with another content type or
/// no boundary rejects with 400.
pub struct UploadForm(pub Multipart);

impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        Ok(Self(multipart))
    }
}

/// Maps an error raised while reading multipart fields.
///
/// Hitting the body limit surfaces here, not in the extractor.
pub fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(UPLOAD_TOO_LARGE)
    } else {
        AppError::validation(format!("Invalid multipart body: {}", err.body_text()))
    }
}
