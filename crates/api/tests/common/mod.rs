#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use collectibles_api::config::ServerConfig;
use collectibles_api::router::build_app_router;
use collectibles_api::state::AppState;
use collectibles_db::models::collectible::CreateCollectible;
use collectibles_db::repositories::CollectibleRepo;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const LOCKED_NFC_ID: &str = "test_nfc_locked_123";
pub const UNLOCKED_NFC_ID: &str = "test_nfc_unlocked_456";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        seed_data_path: PathBuf::from("unused.json"),
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Like [`build_test_app`] but with a caller-supplied configuration.
pub fn build_test_app_with_config(pool: SqlitePool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    build_app_router(state)
}

pub fn new_collectible(character_id: i64, nfc_tag_id: &str, is_unlocked: bool) -> CreateCollectible {
    CreateCollectible {
        character_id,
        name: format!("Test Character {character_id}"),
        store_section: "Test Section".to_string(),
        model_3d_path: format!("path/to/model{character_id}.glb"),
        riddle_hint: "Test hint".to_string(),
        product_information: "Test info".to_string(),
        food_waste_tip: "Test tip".to_string(),
        nfc_tag_id: nfc_tag_id.to_string(),
        is_unlocked,
    }
}

/// Insert one locked (101) and one unlocked (102) collectible.
pub async fn seed_locked_and_unlocked(pool: &SqlitePool) {
    CollectibleRepo::create(pool, &new_collectible(101, LOCKED_NFC_ID, false))
        .await
        .unwrap();
    CollectibleRepo::create(pool, &new_collectible(102, UNLOCKED_NFC_ID, true))
        .await
        .unwrap();
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
