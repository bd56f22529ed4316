//! # folio-core
//!
//! Core crate for the Folio portfolio backend. Contains configuration
//! schemas and the unified error system.
//!
//! This crate has **no** internal dependencies on other Folio crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
