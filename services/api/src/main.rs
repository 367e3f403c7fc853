use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;

use common::database::{self, DatabaseConfig};
use tokio::net::TcpListener;

use crate::{
    config::{Settings, StorageBackend},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    info!("Starting rentals API with {:?} storage", settings.storage);

    let app_state = match settings.storage {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = database::init_pool(&db_config).await?;

            if database::health_check(&pool).await? {
                info!("Database connection successful");
            } else {
                anyhow::bail!("Failed to connect to database");
            }

            database::run_migrations(&pool).await?;
            AppState::postgres(pool)
        }
        StorageBackend::Memory => AppState::in_memory(),
    };

    let app = routes::create_router(app_state);

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Rentals API listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
