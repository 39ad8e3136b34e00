//! HTTP REST API routes

mod game_routes;
mod item_routes;
mod mode_routes;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::application::ports::outbound::CatalogError;
use crate::application::services::GameError;
use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Mode routes
        .route("/api/modes", get(mode_routes::list_modes))
        .route("/api/modes/{mode}/items", get(mode_routes::search_items))
        // Catalog routes
        .route("/api/items", get(item_routes::list_items))
        .route("/api/catalog/refresh", post(item_routes::refresh_catalog))
        // Game routes
        .route("/api/daily", post(game_routes::daily_target))
        .route("/api/daily/{mode}", get(game_routes::today_target))
        .route("/api/guess", post(game_routes::evaluate_guess))
}

/// Map a game error onto an HTTP status and message
pub fn error_response(e: GameError) -> (StatusCode, String) {
    let status = match &e {
        GameError::MissingParameters | GameError::InvalidMode(_) => StatusCode::BAD_REQUEST,
        GameError::UnknownItem(_) => StatusCode::NOT_FOUND,
        // Catalog and mode disagree; the caller cannot fix that
        GameError::NoCandidates(_)
        | GameError::Fetch(CatalogError::Store(_))
        | GameError::UnknownMode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        GameError::Fetch(_) => StatusCode::BAD_GATEWAY,
    };

    if status.is_server_error() {
        tracing::error!("{}", e);
    }
    (status, e.to_string())
}
