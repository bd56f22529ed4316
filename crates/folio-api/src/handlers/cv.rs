//! CV upload and download handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use folio_core::error::AppError;
use folio_entity::{CreateCvFile, CvFile};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::multipart::multipart_error;
use crate::extractors::{AuthUser, UploadForm};
use crate::state::AppState;

/// Multipart field carrying the document.
const FILE_FIELD: &str = "file";

/// Longest stored original file name (`cv_files.original_name`).
const MAX_NAME_CHARS: usize = 255;

/// Accepted document extensions and the content type served for each.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
];

/// GET /api/cv
pub async fn list_cv_files(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<CvFile>>>, ApiError> {
    let files = state.cv_files.list().await?;
    Ok(Json(ApiResponse::ok(files)))
}

/// POST /api/cv (multipart, field `file`)
pub async fn upload_cv(
    State(state): State<AppState>,
    auth: AuthUser,
    UploadForm(mut multipart): UploadForm,
) -> Result<(StatusCode, Json<ApiResponse<CvFile>>), ApiError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(String::from).unwrap_or_default();
        let data = field.bytes().await.map_err(multipart_error)?;
        upload = Some((file_name, data));
    }

    let (file_name, data) = upload.ok_or_else(|| AppError::validation("Missing 'file' field"))?;
    if data.is_empty() {
        return Err(AppError::validation("Uploaded file is empty").into());
    }

    let original_name = sanitize_file_name(&file_name);
    let (extension, content_type) = document_type(&original_name)
        .ok_or_else(|| AppError::validation("Only PDF, DOC and DOCX files are accepted"))?;

    let stored_path = format!("cv/{}.{extension}", Uuid::new_v4());
    let size_bytes = data.len() as i64;
    state.storage.write(&stored_path, data).await?;

    let record = state
        .cv_files
        .create(CreateCvFile {
            original_name,
            stored_path: stored_path.clone(),
            content_type: content_type.to_string(),
            size_bytes,
        })
        .await;

    let cv = match record {
        Ok(cv) => cv,
        Err(e) => {
            if let Err(cleanup) = state.storage.delete(&stored_path).await {
                warn!(path = %stored_path, error = %cleanup, "Failed to remove orphaned upload");
            }
            return Err(e.into());
        }
    };

    info!(
        user_id = auth.user_id,
        cv_id = cv.id,
        size_bytes = cv.size_bytes,
        "CV uploaded"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(cv))))
}

/// GET /api/cv/download
pub async fn download_cv(State(state): State<AppState>) -> Result<Response, ApiError> {
    let cv = state
        .cv_files
        .latest()
        .await?
        .ok_or_else(|| AppError::not_found("No CV has been uploaded"))?;

    let data = state.storage.read_bytes(&cv.stored_path).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, cv.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition(&cv.original_name),
        )
        .header(header::CONTENT_LENGTH, data.len())
        .body(Body::from(data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// Keeps the last path segment of a client-supplied name and drops
/// characters that cannot appear inside a quoted header value.
fn sanitize_file_name(name: &str) -> String {
    name.rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .collect::<String>()
        .trim()
        .chars()
        .take(MAX_NAME_CHARS)
        .collect()
}

/// `attachment` disposition for `name`.
///
/// Non-ASCII names get an `_`-substituted ASCII `filename` plus an RFC 5987
/// `filename*` carrying the UTF-8 original.
fn content_disposition(name: &str) -> String {
    let fallback: String = name
        .chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '_' })
        .collect();

    if fallback == name {
        format!("attachment; filename=\"{name}\"")
    } else {
        format!(
            "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
            urlencoding::encode(name)
        )
    }
}

/// Extension and content type for an accepted document name.
fn document_type(name: &str) -> Option<(&'static str, &'static str)> {
    let (_, extension) = name.rsplit_once('.')?;
    let extension = extension.to_ascii_lowercase();
    ALLOWED_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .copied()
}
