//! Game mode API routes
//!
//! Endpoints for listing modes and suggesting items while the player types.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{ItemSearchQueryDto, ModeSummaryDto};
use crate::application::services::DEFAULT_SEARCH_LIMIT;
use crate::domain::entities::Item;
use crate::infrastructure::http::error_response;
use crate::infrastructure::state::AppState;

/// Suggestions are capped regardless of the requested limit
const MAX_SEARCH_LIMIT: usize = 50;

/// List all game modes with their scored stats, in display order
pub async fn list_modes(State(state): State<Arc<AppState>>) -> Json<Vec<ModeSummaryDto>> {
    Json(
        state
            .game_service
            .list_modes()
            .iter()
            .map(ModeSummaryDto::from)
            .collect(),
    )
}

/// Items of a mode whose name contains `q`
pub async fn search_items(
    State(state): State<Arc<AppState>>,
    Path(mode_id): Path<String>,
    Query(query): Query<ItemSearchQueryDto>,
) -> Result<Json<Vec<Item>>, (StatusCode, String)> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);

    let items = state
        .game_service
        .search_items(&mode_id, query.q.as_deref().unwrap_or_default(), limit)
        .await
        .map_err(error_response)?;

    Ok(Json(items))
}
