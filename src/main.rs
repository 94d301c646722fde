mod config;
mod error;
mod models;
mod pricing;
mod routes;
mod state;

use crate::config::Config;
use crate::pricing::RateCatalog;
use crate::state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leadline=info,tower_http=info".into()),
        )
        .init();

    // Load config
    let config = Config::from_env()?;
    let port = config.port;

    tracing::info!("Starting leadline estimator on port {}", port);

    // Compiled-in rate data, loaded once and shared read-only
    let catalog = RateCatalog::standard();
    tracing::info!("Rate catalog loaded: {} plan entries", catalog.all_entries().len());

    // Build state
    let state = AppState {
        config: Arc::new(config),
        catalog: Arc::new(catalog),
    };

    routes::health::init_start_time();

    // Build router
    let app = routes::build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("Listening on 0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
