//! # folio-entity
//!
//! Domain entity models for the Folio backend. Every struct in this crate
//! represents a database table row or the data needed to insert one.
//! Row types derive `sqlx::FromRow`.

pub mod category;
pub mod cv;
pub mod folder;
pub mod user;

pub use category::{Category, CreateCategory};
pub use cv::{CreateCvFile, CvFile};
pub use folder::{CreateFolder, DocumentFolder};
pub use user::{CreateUser, User, UserSummary};
