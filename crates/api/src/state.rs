use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once in `main` (or a test) and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: impactbridge_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
