//! Route definitions for the relay endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// POST /player    -> player profile by tag
/// POST /club      -> club profile by tag
/// GET  /brawlers  -> brawler catalog
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/player", post(stats::player))
        .route("/club", post(stats::club))
        .route("/brawlers", get(stats::brawlers))
}
