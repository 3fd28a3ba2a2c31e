mod catalog;
mod chat;
mod config;
mod errors;
mod interaction_log;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::interaction_log::CsvFileLogger;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Waypoint API v{}", env!("CARGO_PKG_VERSION"));

    // Load the career catalog once; it is read-only for the process lifetime
    let catalog = Arc::new(Catalog::load(&config.catalog_path)?);
    if catalog.is_empty() {
        tracing::warn!("catalog is empty; every turn will return no matches");
    }
    info!("Catalog loaded ({} careers)", catalog.len());

    // Interaction sink; appends are dispatched off the request path
    let logger = Arc::new(CsvFileLogger::new(config.interaction_log_path.clone()));
    info!(
        "Interaction log at {}",
        config.interaction_log_path.display()
    );

    // Build app state
    let state = AppState {
        catalog,
        logger,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
