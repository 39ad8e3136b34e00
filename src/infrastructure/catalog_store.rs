//! Catalog store adapters
//!
//! - Memory: keeps the snapshot for the lifetime of the process
//! - File: JSON file on disk, survives restarts

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::{CatalogError, CatalogStore};
use crate::domain::entities::Catalog;

/// In-process snapshot store
#[derive(Default)]
pub struct MemoryCatalogStore {
    catalog: RwLock<Option<Catalog>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn load(&self) -> Result<Option<Catalog>, CatalogError> {
        Ok(self.catalog.read().await.clone())
    }

    async fn save(&self, catalog: &Catalog) -> Result<(), CatalogError> {
        *self.catalog.write().await = Some(catalog.clone());
        Ok(())
    }
}

/// Snapshot store backed by a JSON file
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogStore for FileCatalogStore {
    /// A missing, unreadable or corrupt file reads as "nothing stored" so the
    /// caller falls back to fetching.
    async fn load(&self) -> Result<Option<Catalog>, CatalogError> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Error reading catalog cache: {}", e);
                return Ok(None);
            }
        };

        match serde_json::from_slice::<Catalog>(&content) {
            Ok(catalog) => Ok(Some(catalog)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Discarding corrupt catalog cache: {}", e);
                Ok(None)
            }
        }
    }

    async fn save(&self, catalog: &Catalog) -> Result<(), CatalogError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CatalogError::Store(e.to_string()))?;
        }

        let content =
            serde_json::to_vec(catalog).map_err(|e| CatalogError::Store(e.to_string()))?;

        // Write beside the target then rename, so readers never see half a file
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content)
            .await
            .map_err(|e| CatalogError::Store(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| CatalogError::Store(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), items = catalog.len(), "Catalog cache written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Item, ItemKind, WeaponAttributes};
    use chrono::Utc;

    fn sample() -> Catalog {
        Catalog::new(
            vec![Item::new(
                "Nirvana",
                ItemKind::Weapon(WeaponAttributes {
                    rarity: Some("mythic".into()),
                    ..Default::default()
                }),
            )
            .with_level(100)],
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryCatalogStore::new();
        assert!(store.load().await.unwrap().is_none());

        let catalog = sample();
        store.save(&catalog).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(catalog));
    }

    #[tokio::test]
    async fn test_file_store_creates_directories_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCatalogStore::new(dir.path().join("nested/.cache/items.json"));
        assert!(store.load().await.unwrap().is_none());

        let catalog = sample();
        store.save(&catalog).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.items, catalog.items);
        assert_eq!(loaded.fetched_at, catalog.fetched_at);
    }

    #[tokio::test]
    async fn test_file_store_treats_corrupt_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let store = FileCatalogStore::new(&path);
        assert!(store.load().await.unwrap().is_none());
    }
}
