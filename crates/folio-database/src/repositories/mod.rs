//! Postgres repository implementations of the store contracts.

pub mod category;
pub mod cv;
pub mod folder;
pub mod user;

pub use category::CategoryRepository;
pub use cv::CvRepository;
pub use folder::FolderRepository;
pub use user::UserRepository;

use folio_core::error::{AppError, ErrorKind};

/// Maps constraint violations to client errors and everything else to a
/// database error carrying `context`.
fn map_write_error(err: sqlx::Error, context: &str, conflict: &str, missing: &str) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::conflict(conflict);
        }
        if db_err.is_foreign_key_violation() {
            return AppError::not_found(missing);
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), err)
}
