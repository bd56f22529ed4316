//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An admin account able to sign in to the backend.
#[derive(Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash in PHC format.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public view of this user.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// The `{ id, username }` pair returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User ID.
    pub id: i32,
    /// Username.
    pub username: String,
}

/// Data required to create a new user.
#[derive(Clone)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: 1,
            username: "admin".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_serialization_omits_hash() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "admin");
    }

    #[test]
    fn test_debug_omits_hash() {
        assert!(!format!("{:?}", sample()).contains("argon2id"));
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            sample().summary(),
            UserSummary {
                id: 1,
                username: "admin".to_string()
            }
        );
    }
}
