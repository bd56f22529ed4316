//! Authentication configuration.
//!
//! The JWT signing secret is resolved exactly once at startup through
//! [`AuthConfig::signing_secret`] and handed to the token service as an
//! explicit value. Secret material never appears in `Debug` output.

use std::fmt;

use serde::Deserialize;

use super::DeploymentEnvironment;
use crate::error::AppError;

/// Signing key used when no secret is configured in development.
///
/// Anyone can forge tokens for a server running with this value, so it is
/// refused outright in production.
pub const DEV_FALLBACK_SECRET: &str = "folio-development-only-insecure-secret";

/// A secret string (JWT key or password) that never prints its content.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
    /// Wraps a raw secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw secret. Callers must not log the result.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the secret is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// The resolved HMAC key for token signing and verification.
#[derive(Clone)]
pub struct SigningSecret {
    secret: SecretString,
    fallback: bool,
}

impl SigningSecret {
    /// Builds a signing secret from an explicit value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(value),
            fallback: false,
        }
    }

    /// Returns the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose().as_bytes()
    }

    /// Whether this is the insecure development fallback.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSecret")
            .field("secret", &self.secret)
            .field("fallback", &self.fallback)
            .finish()
    }
}

/// Credentials for the admin account created on first start.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapAdmin {
    /// Admin username.
    pub username: String,
    /// Admin plaintext password, hashed before it is stored.
    pub password: SecretString,
}

/// Authentication and credential configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: Option<SecretString>,
    /// Admin account provisioned at startup when missing.
    #[serde(default)]
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl AuthConfig {
    /// Resolves the signing secret for the given deployment environment.
    ///
    /// A configured, non-blank secret is always used. Without one, production
    /// refuses to start and development falls back to
    /// [`DEV_FALLBACK_SECRET`].
    pub fn signing_secret(
        &self,
        environment: DeploymentEnvironment,
    ) -> Result<SigningSecret, AppError> {
        match &self.jwt_secret {
            Some(secret) if !secret.is_blank() => Ok(SigningSecret {
                secret: secret.clone(),
                fallback: false,
            }),
            _ if environment.is_production() => Err(AppError::configuration(
                "JWT signing secret is not configured; set JWT_SECRET before starting in production",
            )),
            _ => {
                tracing::warn!(
                    "JWT signing secret is not configured; using the insecure development fallback"
                );
                Ok(SigningSecret {
                    secret: SecretString::new(DEV_FALLBACK_SECRET),
                    fallback: true,
                })
            }
        }
    }
}
