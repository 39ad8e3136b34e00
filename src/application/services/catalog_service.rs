//! Catalog Service - One cached view of the upstream item database
//!
//! Lookup order on every `get`:
//! 1. the in-process snapshot, if younger than the TTL
//! 2. the configured store, if its snapshot is younger than the TTL
//! 3. a fresh fetch from the source, written back to the store
//!
//! Refreshes are single-flight: concurrent callers that miss the cache wait
//! on one fetch instead of each hitting the upstream.

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

use crate::application::ports::outbound::{CatalogError, CatalogSource, CatalogStore};
use crate::domain::entities::Catalog;

pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    store: Arc<dyn CatalogStore>,
    ttl: TimeDelta,
    current: RwLock<Option<Arc<Catalog>>>,
    refresh_lock: Mutex<()>,
}

impl CatalogService {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        store: Arc<dyn CatalogStore>,
        ttl: TimeDelta,
    ) -> Self {
        Self {
            source,
            store,
            ttl,
            current: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Get the current catalog, refreshing it when stale
    pub async fn get(&self) -> Result<Arc<Catalog>, CatalogError> {
        if let Some(catalog) = self.fresh_snapshot().await {
            return Ok(catalog);
        }

        let _guard = self.refresh_lock.lock().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(catalog) = self.fresh_snapshot().await {
            debug!("Catalog refreshed by a concurrent caller");
            return Ok(catalog);
        }

        match self.store.load().await {
            Ok(Some(stored)) if stored.is_fresh(self.ttl, Utc::now()) => {
                info!(items = stored.len(), fetched_at = %stored.fetched_at, "Catalog loaded from store");
                return Ok(self.publish(stored).await);
            }
            Ok(Some(stored)) => {
                debug!(fetched_at = %stored.fetched_at, "Stored catalog is stale");
            }
            Ok(None) => debug!("No stored catalog"),
            Err(e) => warn!("Error loading stored catalog: {}", e),
        }

        self.fetch_and_publish().await
    }

    /// Fetch from the source regardless of cache state
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Arc<Catalog>, CatalogError> {
        let _guard = self.refresh_lock.lock().await;
        self.fetch_and_publish().await
    }

    async fn fresh_snapshot(&self) -> Option<Arc<Catalog>> {
        self.current
            .read()
            .await
            .as_ref()
            .filter(|catalog| catalog.is_fresh(self.ttl, Utc::now()))
            .cloned()
    }

    async fn fetch_and_publish(&self) -> Result<Arc<Catalog>, CatalogError> {
        let items = self.source.fetch_catalog().await.inspect_err(|e| {
            warn!("Catalog fetch failed: {}", e);
        })?;
        let catalog = Catalog::new(items, Utc::now());
        if catalog.is_empty() {
            warn!("Catalog source returned no items");
        }

        if let Err(e) = self.store.save(&catalog).await {
            warn!("Error saving catalog to store: {}", e);
        }

        info!(items = catalog.len(), "Catalog fetched from source");
        Ok(self.publish(catalog).await)
    }

    async fn publish(&self, catalog: Catalog) -> Arc<Catalog> {
        let catalog = Arc::new(catalog);
        *self.current.write().await = Some(catalog.clone());
        catalog
    }
}
