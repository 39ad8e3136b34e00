//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::TimeDelta;

use crate::application::ports::outbound::{CatalogSource, CatalogStore};
use crate::application::services::{CatalogService, GameService};
use crate::domain::services::ModeRegistry;
use crate::infrastructure::catalog_store::{FileCatalogStore, MemoryCatalogStore};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::wynncraft::WynncraftClient;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub catalog_service: Arc<CatalogService>,
    pub game_service: GameService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        // Initialize the upstream client
        let source = WynncraftClient::new(
            &config.catalog_url,
            Duration::from_secs(config.catalog_timeout_secs),
        )
        .context("Failed to build the item database client")?;

        // Pick the snapshot store
        let store: Arc<dyn CatalogStore> = match &config.catalog_cache_path {
            Some(path) => {
                let store = FileCatalogStore::new(path);
                tracing::debug!(path = %store.path().display(), "Using file catalog store");
                Arc::new(store)
            }
            None => Arc::new(MemoryCatalogStore::new()),
        };

        Self::with_adapters(config, Arc::new(source), store)
    }

    /// Build the state around explicit catalog adapters
    pub fn with_adapters(
        config: AppConfig,
        source: Arc<dyn CatalogSource>,
        store: Arc<dyn CatalogStore>,
    ) -> Result<Self> {
        let ttl_secs = i64::try_from(config.catalog_ttl_secs)
            .context("CATALOG_TTL_SECS is too large")?;
        let ttl = TimeDelta::try_seconds(ttl_secs).context("CATALOG_TTL_SECS is too large")?;

        // Initialize application services
        let catalog_service = Arc::new(CatalogService::new(source, store, ttl));
        let game_service = GameService::new(Arc::new(ModeRegistry::new()), catalog_service.clone());

        Ok(Self {
            config,
            catalog_service,
            game_service,
        })
    }
}
