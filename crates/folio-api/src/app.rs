//! Application builder: wires router, middleware and state into an Axum
//! app, and runs the server.

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use folio_auth::{CredentialVerifier, PasswordHasher, TokenService, provision_user};
use folio_core::config::{AppConfig, CorsConfig};
use folio_core::error::AppError;
use folio_database::DatabasePool;
use folio_database::repositories::{
    CategoryRepository, CvRepository, FolderRepository, UserRepository,
};
use folio_database::store::UserStore;
use folio_storage::LocalStorageProvider;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> axum::Router {
    build_router(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Runs the Folio server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    tracing::info!(environment = ?config.environment, "Starting Folio server...");

    // ── Step 1: Resolve the signing secret ───────────────────────
    let secret = config.auth.signing_secret(config.environment)?;
    let tokens = Arc::new(TokenService::new(&secret));

    // ── Step 2: Initialize storage ───────────────────────────────
    let storage = Arc::new(LocalStorageProvider::new(&config.storage.data_root).await?);

    // ── Step 3: Initialize repositories ──────────────────────────
    let db_pool = db.pool().clone();
    let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.clone()));
    let categories = Arc::new(CategoryRepository::new(db_pool.clone()));
    let folders = Arc::new(FolderRepository::new(db_pool.clone()));
    let cv_files = Arc::new(CvRepository::new(db_pool));

    // ── Step 4: Initialize credential verification ───────────────
    let credentials = Arc::new(CredentialVerifier::new(
        Arc::clone(&users),
        PasswordHasher::new(),
    ));

    if let Some(admin) = &config.auth.bootstrap_admin {
        provision_user(users.as_ref(), &credentials, admin).await?;
    }

    // ── Step 5: Build and start HTTP server ──────────────────────
    let state = AppState {
        tokens,
        credentials,
        database: Arc::new(db),
        users,
        categories,
        folders,
        cv_files,
        storage,
        upload_limit_bytes: config.storage.max_upload_size_bytes as usize,
    };

    let app = build_app(state, &config.server.cors);
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Folio server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Folio server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
