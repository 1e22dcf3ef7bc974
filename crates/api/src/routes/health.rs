use axum::extract::State;
use axum::{routing::get, Json, Router};
use collectibles_db::repositories::CollectibleRepo;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Number of stored collectibles; absent when the database is unreachable.
    pub collectible_count: Option<i64>,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = collectibles_db::health_check(&state.pool).await.is_ok();
    let collectible_count = if db_healthy {
        CollectibleRepo::count(&state.pool).await.ok()
    } else {
        None
    };

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        collectible_count,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
