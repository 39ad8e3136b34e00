//! Application configuration

use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_CATALOG_URL: &str = "https://api.wynncraft.com/v3/item/database?fullResult";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,

    /// Upstream item database URL
    pub catalog_url: String,
    /// How long a fetched catalog stays fresh
    pub catalog_ttl_secs: u64,
    /// JSON cache file; `None` keeps the catalog in memory only
    pub catalog_cache_path: Option<String>,
    /// Timeout for the upstream request
    pub catalog_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            catalog_url: env::var("CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string()),
            catalog_ttl_secs: env::var("CATALOG_TTL_SECS")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .context("CATALOG_TTL_SECS must be a number of seconds")?,
            catalog_cache_path: match env::var("CATALOG_CACHE_PATH") {
                Ok(path) if path.trim().is_empty() => None,
                Ok(path) => Some(path),
                Err(_) => Some(".cache/items.json".to_string()),
            },
            catalog_timeout_secs: env::var("CATALOG_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("CATALOG_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_ttl_secs: 86_400,
            catalog_cache_path: Some(".cache/items.json".to_string()),
            catalog_timeout_secs: 30,
        }
    }
}
