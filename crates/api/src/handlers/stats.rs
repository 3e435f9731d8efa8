//! Handlers for the relay endpoints (player, club, brawler catalog).
//!
//! Each handler normalizes its input where needed, issues exactly one
//! upstream call, and passes the upstream JSON payload through verbatim.
//! No retries, no caching.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use brawlgate_core::tag::Tag;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body carrying a player or club tag.
#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub tag: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /player
///
/// Normalize the tag and relay the upstream player profile.
pub async fn player(
    State(state): State<AppState>,
    Json(body): Json<TagRequest>,
) -> AppResult<impl IntoResponse> {
    let tag = Tag::parse(&body.tag)?;
    let data = state
        .brawl
        .get_player(&tag)
        .await
        .map_err(|e| AppError::from_upstream("Player", e))?;
    Ok(Json(data))
}

/// POST /club
///
/// Normalize the tag and relay the upstream club profile.
pub async fn club(
    State(state): State<AppState>,
    Json(body): Json<TagRequest>,
) -> AppResult<impl IntoResponse> {
    let tag = Tag::parse(&body.tag)?;
    let data = state
        .brawl
        .get_club(&tag)
        .await
        .map_err(|e| AppError::from_upstream("Club", e))?;
    Ok(Json(data))
}

/// GET /brawlers
///
/// Relay the catalog of playable brawlers.
pub async fn brawlers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data = state.brawl.get_brawlers().await?;
    Ok(Json(data))
}
