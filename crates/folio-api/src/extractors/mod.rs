//! Custom Axum extractors.
//!
//! Every rejection goes through [`ApiError`](crate::error::ApiError), so
//! clients always receive an `{ "error": ... }` body.

pub mod auth;
pub mod json;
pub mod multipart;
pub mod path;
pub mod query;

pub use auth::AuthUser;
pub use json::ValidatedJson;
pub use multipart::UploadForm;
pub use path::IdPath;
pub use query::QueryParams;
