//! Route definitions for collectibles and the unlock action.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::collectible;
use crate::state::AppState;

/// Collectible routes, mounted at the root.
///
/// ```text
/// GET    /collectibles                      -> list
/// GET    /collectibles/                     -> list
/// GET    /collectibles/{character_id}       -> get_by_character_id
/// GET    /collectibles/nfc/{nfc_tag_id}     -> get_by_nfc_tag_id
/// POST   /api/unlock-character              -> unlock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/collectibles", get(collectible::list))
        .route("/collectibles/", get(collectible::list))
        .route(
            "/collectibles/{character_id}",
            get(collectible::get_by_character_id),
        )
        .route(
            "/collectibles/nfc/{nfc_tag_id}",
            get(collectible::get_by_nfc_tag_id),
        )
        .route("/api/unlock-character", post(collectible::unlock))
}
