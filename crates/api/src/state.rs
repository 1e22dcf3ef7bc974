use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted internally and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Each request checks a connection out for
    /// the duration of its query.
    pub pool: collectibles_db::DbPool,
    pub config: Arc<ServerConfig>,
}
