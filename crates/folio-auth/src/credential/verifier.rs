//! Credential verification for login.

use std::sync::Arc;

use tracing::{debug, info};

use folio_core::error::AppError;
use folio_database::store::UserStore;
use folio_entity::User;

use crate::password::PasswordHasher;

/// Client-facing message for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Checks a username/password pair against stored user records.
#[derive(Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("hasher", &self.hasher)
            .finish_non_exhaustive()
    }
}

impl CredentialVerifier {
    /// Creates a verifier reading from `users`.
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Hashes a plaintext password for storage.
    ///
    /// Runs on the blocking pool; Argon2 is deliberately slow.
    pub async fn hash_credential(&self, password: &str) -> Result<String, AppError> {
        let hasher = self.hasher;
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    /// Returns whether `password` matches `stored_hash`. Never errors.
    pub async fn verify_credential(&self, password: &str, stored_hash: &str) -> bool {
        let hasher = self.hasher;
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &stored_hash))
            .await
            .unwrap_or(false)
    }

    /// Authenticates a user by username and password.
    ///
    /// Unknown users and wrong passwords both fail with
    /// [`INVALID_CREDENTIALS`]; only the server log tells them apart.
    /// Store failures propagate unchanged.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            info!(username, reason = "unknown_user", "Login rejected");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.verify_credential(password, &user.password_hash).await {
            info!(
                username,
                user_id = user.id,
                reason = "wrong_password",
                "Login rejected"
            );
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        debug!(user_id = user.id, "Credentials verified");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::error::ErrorKind;
    use folio_database::MemoryStore;
    use folio_entity::CreateUser;

    async fn verifier_with_admin() -> CredentialVerifier {
        let store = Arc::new(MemoryStore::new());
        let hasher = PasswordHasher::new();
        UserStore::create(
            store.as_ref(),
            CreateUser {
                username: "admin".to_string(),
                password_hash: hasher.hash_password("admin123").expect("hash"),
            },
        )
        .await
        .expect("user");
        CredentialVerifier::new(store, hasher)
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let verifier = verifier_with_admin().await;
        let user = verifier
            .authenticate("admin", "admin123")
            .await
            .expect("authenticated");
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "admin");
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_look_the_same() {
        let verifier = verifier_with_admin().await;
        let unknown = verifier.authenticate("nobody", "admin123").await.unwrap_err();
        let wrong = verifier.authenticate("admin", "wrong").await.unwrap_err();

        assert_eq!(unknown.kind, ErrorKind::Authentication);
        assert_eq!(wrong.kind, ErrorKind::Authentication);
        assert_eq!(unknown.message, INVALID_CREDENTIALS);
        assert_eq!(wrong.message, unknown.message);
    }

    #[tokio::test]
    async fn test_malformed_stored_hash_fails_closed() {
        let store = Arc::new(MemoryStore::new());
        UserStore::create(
            store.as_ref(),
            CreateUser {
                username: "legacy".to_string(),
                password_hash: "plaintext-password".to_string(),
            },
        )
        .await
        .expect("user");
        let verifier = CredentialVerifier::new(store, PasswordHasher::new());

        let err = verifier
            .authenticate("legacy", "plaintext-password")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn test_hash_credential_verifies() {
        let verifier = verifier_with_admin().await;
        let hash = verifier.hash_credential("s3cret").await.expect("hash");
        assert!(verifier.verify_credential("s3cret", &hash).await);
        assert!(!verifier.verify_credential("s3cre7", &hash).await);
    }
}
