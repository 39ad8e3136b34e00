//! Catalog ports - Where items come from and where snapshots are kept

use async_trait::async_trait;

use crate::domain::entities::{Catalog, Item};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Request(String),
    #[error("Catalog source responded with status {0}")]
    Status(u16),
    #[error("Catalog payload could not be decoded: {0}")]
    Decode(String),
    #[error("Catalog store error: {0}")]
    Store(String),
}

/// The upstream item database
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every item, in upstream order
    async fn fetch_catalog(&self) -> Result<Vec<Item>, CatalogError>;
}

/// Persistence for the last fetched snapshot
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// The stored snapshot, or `None` when nothing usable is stored
    async fn load(&self) -> Result<Option<Catalog>, CatalogError>;

    async fn save(&self, catalog: &Catalog) -> Result<(), CatalogError>;
}
