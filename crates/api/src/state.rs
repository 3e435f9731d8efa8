use std::sync::Arc;

use brawlgate_brawlstars::api::BrawlStarsApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Both fields are
/// immutable after startup; handlers never coordinate through shared
/// mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the upstream Brawl Stars API.
    pub brawl: Arc<BrawlStarsApi>,
}
