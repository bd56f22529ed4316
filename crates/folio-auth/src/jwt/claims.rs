//! JWT claims carried by session tokens.

use serde::{Deserialize, Serialize};

/// Payload of a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's ID.
    #[serde(rename = "userId")]
    pub user_id: i32,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Whether the token is expired at `now` (seconds since epoch).
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
