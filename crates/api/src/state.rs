use std::sync::Arc;

use comics_db::repositories::ComicsGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway for the comics table.
    pub comics: Arc<dyn ComicsGateway>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
