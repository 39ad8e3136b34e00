//! Application services - Use case implementations

pub mod catalog_service;
pub mod game_service;

pub use catalog_service::CatalogService;
pub use game_service::{GameError, GameService, DEFAULT_SEARCH_LIMIT};
