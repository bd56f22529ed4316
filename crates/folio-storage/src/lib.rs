//! # folio-storage
//!
//! Byte storage for uploaded documents. Paths are relative keys such as
//! `cv/<uuid>.pdf`; metadata lives in the database.

pub mod local;
pub mod provider;

pub use local::LocalStorageProvider;
pub use provider::StorageProvider;
