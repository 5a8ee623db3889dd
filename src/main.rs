//! player-service binary

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use player_service::api::{self, AppState};
use player_service::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use player_service::storage::create_repository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting player-service");

    let repository = create_repository(&config.seed);
    let router = api::create_router(AppState::from_repository(repository));

    let addr = config.bind_addr();
    api::serve(&addr, router)
        .await
        .with_context(|| format!("failed to serve on {}", addr))?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
