//! Daily game API routes
//!
//! Resolving the day's target and scoring guesses against it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use std::sync::Arc;

use crate::application::dto::{DailyRequestDto, GuessRequestDto, GuessResponseDto};
use crate::domain::entities::Item;
use crate::domain::services::daily_seed;
use crate::infrastructure::http::error_response;
use crate::infrastructure::state::AppState;

/// Resolve the target item for an explicit `{seed, mode}`
pub async fn daily_target(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DailyRequestDto>,
) -> Result<Json<Item>, (StatusCode, String)> {
    state
        .game_service
        .daily_target(req)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Resolve today's target using the server's local date as the seed
pub async fn today_target(
    State(state): State<Arc<AppState>>,
    Path(mode_id): Path<String>,
) -> Result<Json<Item>, (StatusCode, String)> {
    let seed = daily_seed(Local::now().date_naive());

    state
        .game_service
        .daily_target(DailyRequestDto {
            seed: Some(seed),
            mode: Some(mode_id),
        })
        .await
        .map(Json)
        .map_err(error_response)
}

/// Score a guess against the target
pub async fn evaluate_guess(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GuessRequestDto>,
) -> Result<Json<GuessResponseDto>, (StatusCode, String)> {
    state
        .game_service
        .evaluate_guess(req)
        .await
        .map(Json)
        .map_err(error_response)
}
