//! Username/password verification against the user store.

pub mod provision;
pub mod verifier;

pub use provision::provision_user;
pub use verifier::{CredentialVerifier, INVALID_CREDENTIALS};
