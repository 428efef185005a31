//! PlayerHub server: player profiles, achievements and their owners.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use playerhub_api::{AppState, Repositories};
use playerhub_core::config::{AppConfig, DatabaseProvider};
use playerhub_core::error::AppError;
use playerhub_database::DatabasePool;

#[tokio::main]
async fn main() {
    let env = std::env::var("PLAYERHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

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
    tracing::info!("Starting PlayerHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Repositories ─────────────────────────────────────
    let (repos, pool) = match config.database.provider {
        DatabaseProvider::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = DatabasePool::connect(&config.database).await?;
            if !pool.health_check().await? {
                return Err(AppError::internal("Database health check failed"));
            }
            (Repositories::postgres(&pool), Some(pool))
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using in-memory repositories; data is lost on restart");
            (Repositories::in_memory(), None)
        }
    };

    // ── Step 2: Auth chain and services ──────────────────────────
    let state = AppState::new(config, repos)?;
    tracing::info!(key_id = %state.token_codec.encoder().key_id(), "Authentication initialized");

    // ── Step 3: Serve ────────────────────────────────────────────
    let result = playerhub_api::serve(state).await;

    if let Some(pool) = pool {
        pool.close().await;
    }

    result
}
