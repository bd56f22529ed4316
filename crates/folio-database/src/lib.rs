//! # folio-database
//!
//! PostgreSQL connection management, the store contracts the rest of the
//! workspace programs against, their Postgres repositories, and an
//! in-memory implementation.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{CategoryStore, CvStore, FolderStore, StoreHealth, UserStore};
