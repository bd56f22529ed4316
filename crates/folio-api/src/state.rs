//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use folio_auth::{CredentialVerifier, TokenService};
use folio_database::store::{CategoryStore, CvStore, FolderStore, StoreHealth, UserStore};
use folio_storage::StorageProvider;

/// Shared dependencies, passed to every handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks and are
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    // ── Auth ─────────────────────────────────────────────────
    /// Session token issuance and verification
    pub tokens: Arc<TokenService>,
    /// Username/password verification
    pub credentials: Arc<CredentialVerifier>,

    // ── Stores ───────────────────────────────────────────────
    /// Backing database liveness
    pub database: Arc<dyn StoreHealth>,
    /// User accounts
    pub users: Arc<dyn UserStore>,
    /// Portfolio categories
    pub categories: Arc<dyn CategoryStore>,
    /// Document folders
    pub folders: Arc<dyn FolderStore>,
    /// CV upload records
    pub cv_files: Arc<dyn CvStore>,
    /// Uploaded file bytes
    pub storage: Arc<dyn StorageProvider>,

    // ── Limits ───────────────────────────────────────────────
    /// Maximum request body size in bytes
    pub upload_limit_bytes: usize,
}
