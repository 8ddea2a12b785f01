//! Trending-Topics Aggregation Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the fan-out aggregator, CORS, and
//! tracing.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hotboard::api::{self, AppState};
use hotboard::config::ServerConfig;
use hotboard::trends::fetch::FetchExecutor;
use hotboard::trends::TrendAggregator;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = ServerConfig::from_env();
    let aggregator = TrendAggregator::new(FetchExecutor::new());
    let state = AppState {
        aggregator: Arc::new(aggregator),
    };
    let router = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "trending aggregate endpoint listening");
    axum::serve(listener, router).await?;
    Ok(())
}
