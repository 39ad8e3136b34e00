//! Wynndle Engine - Backend API for the daily Wynncraft item guessing game
//!
//! The Engine is the backend server that:
//! - Fetches and caches the Wynncraft item database
//! - Picks each mode's daily target item from a seed
//! - Scores guesses stat by stat against the target

mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wynndle_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wynndle Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Catalog: {}", config.catalog_url);
    tracing::info!("  Catalog TTL: {}s", config.catalog_ttl_secs);
    match &config.catalog_cache_path {
        Some(path) => tracing::info!("  Catalog cache: {}", path),
        None => tracing::info!("  Catalog cache: memory"),
    }

    // Initialize application state
    let state = Arc::new(AppState::new(config)?);
    tracing::info!("Application state initialized");

    // Warm the catalog in the background
    let warmup = {
        let catalog = state.catalog_service.clone();
        tokio::spawn(async move {
            match catalog.get().await {
                Ok(catalog) => tracing::info!("Catalog ready with {} items", catalog.len()),
                Err(e) => tracing::warn!("Catalog warmup failed, will retry on demand: {}", e),
            }
        })
    };

    // Build the router
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(http::create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state.clone());

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    warmup.abort();
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
