//! Request handlers organized by domain.

pub mod auth;
pub mod category;
pub mod cv;
pub mod folder;
pub mod health;
