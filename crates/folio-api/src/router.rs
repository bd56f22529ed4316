//! Route definitions for the Folio HTTP API.
//!
//! All routes are mounted under `/api`. Routes whose handler takes an
//! [`AuthUser`](crate::extractors::AuthUser) are gated by a bearer token;
//! the rest are public.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and request-level middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.upload_limit_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(category_routes())
        .merge(folder_routes())
        .merge(cv_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Auth endpoints: login, verify, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/verify", post(handlers::auth::verify))
        .route("/auth/me", get(handlers::auth::me))
}

/// Category endpoints
fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(handlers::category::list_categories).post(handlers::category::create_category),
        )
        .route(
            "/categories/{id}",
            delete(handlers::category::delete_category),
        )
}

/// Document folder endpoints
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::list_folders).post(handlers::folder::create_folder),
        )
        .route("/folders/{id}", delete(handlers::folder::delete_folder))
}

/// CV endpoints
fn cv_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cv",
            get(handlers::cv::list_cv_files).post(handlers::cv::upload_cv),
        )
        .route("/cv/download", get(handlers::cv::download_cv))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
