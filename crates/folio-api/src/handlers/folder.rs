//! Document folder handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

use folio_core::error::AppError;
use folio_entity::{CreateFolder, DocumentFolder};

use crate::dto::request::{CreateFolderRequest, FolderQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, QueryParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/folders
pub async fn list_folders(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<FolderQuery>,
) -> Result<Json<ApiResponse<Vec<DocumentFolder>>>, ApiError> {
    let folders = state.folders.list(query.category_id).await?;
    Ok(Json(ApiResponse::ok(folders)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DocumentFolder>>), ApiError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Folder name must be 1-100 characters").into());
    }

    let folder = state
        .folders
        .create(CreateFolder {
            name: name.to_string(),
            category_id: req.category_id,
        })
        .await?;

    info!(
        user_id = auth.user_id,
        folder_id = folder.id,
        category_id = ?folder.category_id,
        "Folder created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(folder))))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.folders.delete(id).await? {
        return Err(AppError::not_found(format!("Folder {id} not found")).into());
    }

    info!(user_id = auth.user_id, folder_id = id, "Folder deleted");
    Ok(Json(ApiResponse::ok(())))
}
