//! Application configuration schemas.
//!
//! Configuration is merged by the `config` crate from optional TOML files
//! (`config/default.toml`, `config/{env}.toml`), `FOLIO__`-prefixed
//! environment variables, and the conventional `JWT_SECRET`,
//! `DATABASE_URL` and `PORT` variables.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod storage;

use serde::Deserialize;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, BootstrapAdmin, SecretString, SigningSecret};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Where the process is running. Controls security-relevant fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentEnvironment {
    /// Local development; insecure defaults are tolerated with a warning.
    #[default]
    Development,
    /// Networked deployment; missing secrets are fatal.
    Production,
}

impl DeploymentEnvironment {
    /// Whether this is a production deployment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Deployment environment.
    #[serde(default)]
    pub environment: DeploymentEnvironment,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Upload storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the named environment.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("environment", env)?
            .set_override_option("auth.jwt_secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?;

        Self::from_config(
            builder
                .build()
                .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?,
        )
    }

    /// Deserialize from an already merged configuration.
    pub fn from_config(config: config::Config) -> Result<Self, AppError> {
        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> Result<AppConfig, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        AppConfig::from_config(config)
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = from_toml(
            r#"
            [database]
            url = "postgres://portfolio@localhost/portfolio"
            "#,
        )
        .expect("config");

        assert_eq!(config.environment, DeploymentEnvironment::Development);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.database.max_connections, 10);
        assert!(config.auth.jwt_secret.is_none());
        assert_eq!(config.storage.max_upload_size_bytes, 10 * 1024 * 1024);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_full_config() {
        let config = from_toml(
            r#"
            environment = "production"

            [server]
            host = "127.0.0.1"
            port = 5000

            [database]
            url = "postgres://portfolio@localhost/portfolio"

            [auth]
            jwt_secret = "a-long-production-secret"

            [auth.bootstrap_admin]
            username = "admin"
            password = "admin123"
            "#,
        )
        .expect("config");

        assert!(config.environment.is_production());
        assert_eq!(config.server.bind_address(), "127.0.0.1:5000");
        let admin = config.auth.bootstrap_admin.as_ref().expect("admin");
        assert_eq!(admin.username, "admin");
        assert_eq!(admin.password.expose(), "admin123");
        assert!(
            config
                .auth
                .signing_secret(config.environment)
                .expect("secret")
                .as_bytes()
                .starts_with(b"a-long")
        );
    }

    #[test]
    fn test_missing_database_url_is_rejected() {
        let err = from_toml("environment = \"development\"").unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_unknown_environment_is_rejected() {
        let err = from_toml(
            r#"
            environment = "staging"
            [database]
            url = "postgres://localhost/portfolio"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
