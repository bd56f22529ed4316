//! # folio-auth
//!
//! Authentication for the Folio admin backend.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing and verification
//! - `jwt`: signed session token issuance and verification
//! - `credential`: username/password checks and admin provisioning
//!
//! Tokens are stateless: a token is valid exactly when its signature
//! matches the configured secret and its expiry is in the future.

pub mod credential;
pub mod jwt;
pub mod password;

pub use credential::{CredentialVerifier, provision_user};
pub use jwt::{Claims, TokenService};
pub use password::PasswordHasher;
