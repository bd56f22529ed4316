//! Session token issuance and verification (HS256 JWT).

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use folio_core::config::SigningSecret;
use folio_core::error::AppError;

use super::claims::Claims;

/// Lifetime of every issued token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Issues and verifies signed session tokens.
///
/// Holds no per-session state; the same instance is shared by all
/// request handlers.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("validation", &self.validation)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Creates a token service signing with the given secret.
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Issues a token for `user_id` expiring [`TOKEN_TTL_HOURS`] from now.
    pub fn issue_token(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        self.sign(&claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Verifies a token's signature and expiry.
    ///
    /// Returns the claims only if both checks pass. Every failure,
    /// including malformed input, yields `None`.
    pub fn verify_token(&self, token: &str) -> Option<Claims> {
        let claims = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                debug!(reason = ?e.kind(), "Rejected session token");
                return None;
            }
        };

        // jsonwebtoken accepts exp == now; a token is only valid strictly before exp.
        if claims.is_expired_at(Utc::now().timestamp()) {
            debug!(user_id = claims.user_id, "Rejected expired session token");
            return None;
        }

        Some(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&SigningSecret::new(secret))
    }

    #[test]
    fn test_issue_then_verify() {
        let tokens = service("test-secret");
        let token = tokens.issue_token(1).expect("token");
        let claims = tokens.verify_token(&token).expect("valid");
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 3600);
    }

    #[test]
    fn test_payload_uses_user_id_claim_name() {
        let tokens = service("test-secret");
        let claims = tokens
            .verify_token(&tokens.issue_token(7).expect("token"))
            .expect("valid");
        let json = serde_json::to_value(&claims).expect("json");
        assert_eq!(json["userId"], 7);
        assert!(json.get("exp").is_some());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let tokens = service("test-secret");
        let issued = Utc::now() - Duration::hours(TOKEN_TTL_HOURS + 1);
        let token = tokens
            .sign(&Claims {
                user_id: 1,
                iat: issued.timestamp(),
                exp: (issued + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
            })
            .expect("token");
        assert!(tokens.verify_token(&token).is_none());
    }

    #[test]
    fn test_token_expiring_now_is_rejected() {
        let tokens = service("test-secret");
        let now = Utc::now().timestamp();
        let token = tokens
            .sign(&Claims {
                user_id: 1,
                iat: now - 10,
                exp: now,
            })
            .expect("token");
        assert!(tokens.verify_token(&token).is_none());
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let token = service("other-secret").issue_token(1).expect("token");
        assert!(service("test-secret").verify_token(&token).is_none());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let tokens = service("test-secret");
        for token in ["", "not-a-token", "a.b.c", "eyJhbGciOiJIUzI1NiJ9..."] {
            assert!(tokens.verify_token(token).is_none(), "token {token:?}");
        }
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let tokens = service("test-secret");
        let token = tokens.issue_token(1).expect("token");
        let forged_payload = tokens
            .issue_token(2)
            .expect("token")
            .split('.')
            .nth(1)
            .expect("payload")
            .to_string();
        let mut parts: Vec<&str> = token.split('.').collect();
        parts[1] = &forged_payload;
        assert!(tokens.verify_token(&parts.join(".")).is_none());
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let tokens = service("test-secret");
        let now = Utc::now().timestamp();
        let token = encode(
            &Header::new(Algorithm::HS512),
            &Claims {
                user_id: 1,
                iat: now,
                exp: now + 3600,
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .expect("token");
        assert!(tokens.verify_token(&token).is_none());
    }

    #[test]
    fn test_debug_hides_keys() {
        let rendered = format!("{:?}", service("test-secret"));
        assert!(!rendered.contains("test-secret"));
    }
}
