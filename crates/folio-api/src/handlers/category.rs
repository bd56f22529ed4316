//! Category handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

use folio_core::error::AppError;
use folio_entity::{Category, CreateCategory};

use crate::dto::request::CreateCategoryRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state.categories.list().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), ApiError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Category name must be 1-100 characters").into());
    }

    let category = state
        .categories
        .create(CreateCategory {
            name: name.to_string(),
            description: req.description.filter(|d| !d.trim().is_empty()),
        })
        .await?;

    info!(
        user_id = auth.user_id,
        category_id = category.id,
        name = %category.name,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.categories.delete(id).await? {
        return Err(AppError::not_found(format!("Category {id} not found")).into());
    }

    info!(user_id = auth.user_id, category_id = id, "Category deleted");
    Ok(Json(ApiResponse::ok(())))
}
