//! KitRoute API Server
//!
//! Serves report downloads and CEP zone lookups.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kitroute_api::{AppState, create_router};
use kitroute_db::connect_with;
use kitroute_shared::AppConfig;

const DEFAULT_LOG_FILTER: &str = "kitroute=debug,kitroute_core=debug,kitroute_db=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect_with(&config.database).await?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    info!(
        csv_quoting = ?config.reports.csv_quoting,
        fetch_concurrency = config.reports.fetch_concurrency,
        "Report settings loaded"
    );
    let state = AppState::from_db(db, config.reports.clone());
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
