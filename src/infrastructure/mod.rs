//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Wynncraft: HTTP client for the upstream item database
//! - Catalog store: memory and file snapshot stores
//! - HTTP: REST API routes
//! - Config: Application configuration
//! - State: Shared application state

pub mod catalog_store;
pub mod config;
pub mod http;
pub mod state;
pub mod wynncraft;
