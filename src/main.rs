//! Folio Server: admin backend for a personal portfolio site.
//!
//! Main entry point that loads configuration, initializes logging,
//! prepares the database and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use folio_core::config::AppConfig;
use folio_core::error::AppError;
use folio_database::DatabasePool;

#[tokio::main]
async fn main() {
    let env = std::env::var("FOLIO_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    folio_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Serve until shutdown ─────────────────────────────
    let result = folio_api::run_server(config, db.clone()).await;

    db.close().await;
    result
}
