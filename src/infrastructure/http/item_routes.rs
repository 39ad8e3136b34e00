//! Item catalog API routes

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::dto::CatalogRefreshDto;
use crate::domain::entities::Item;
use crate::infrastructure::http::error_response;
use crate::infrastructure::state::AppState;

/// The full catalog, in upstream order
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Item>>, (StatusCode, String)> {
    let catalog = state
        .game_service
        .catalog()
        .await
        .map_err(error_response)?;

    Ok(Json(catalog.items.clone()))
}

/// Re-fetch the catalog from upstream, bypassing the cache
pub async fn refresh_catalog(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CatalogRefreshDto>, (StatusCode, String)> {
    let catalog = state
        .catalog_service
        .refresh()
        .await
        .map_err(|e| error_response(e.into()))?;

    Ok(Json(CatalogRefreshDto {
        items: catalog.len(),
        fetched_at: catalog.fetched_at,
    }))
}
