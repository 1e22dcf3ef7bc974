//! Handlers for the `/collectibles` resource and the unlock action.

use axum::extract::State;
use axum::Json;
use collectibles_core::error::CoreError;
use collectibles_core::pagination::{
    clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
use collectibles_core::types::DbId;
use collectibles_db::repositories::CollectibleRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::ListParams;
use crate::response::CollectibleResponse;
use crate::services;
use crate::state::AppState;

/// Body of `POST /api/unlock-character`, as sent by the NFC scanner client.
#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
}

/// GET /collectibles/
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Vec<CollectibleResponse>>> {
    let skip = clamp_offset(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

    let collectibles = CollectibleRepo::list(&state.pool, skip, limit).await?;
    Ok(Json(
        collectibles
            .into_iter()
            .map(CollectibleResponse::from)
            .collect(),
    ))
}

/// GET /collectibles/{character_id}
pub async fn get_by_character_id(
    State(state): State<AppState>,
    AppPath(character_id): AppPath<DbId>,
) -> AppResult<Json<CollectibleResponse>> {
    let collectible = CollectibleRepo::find_by_character_id(&state.pool, character_id)
        .await?
        .ok_or_else(|| CoreError::collectible_not_found(character_id))?;
    Ok(Json(collectible.into()))
}

/// GET /collectibles/nfc/{nfc_tag_id}
pub async fn get_by_nfc_tag_id(
    State(state): State<AppState>,
    AppPath(nfc_tag_id): AppPath<String>,
) -> AppResult<Json<CollectibleResponse>> {
    let collectible = CollectibleRepo::find_by_nfc_tag_id(&state.pool, &nfc_tag_id)
        .await?
        .ok_or_else(|| CoreError::nfc_tag_not_found(&nfc_tag_id))?;
    Ok(Json(collectible.into()))
}

/// POST /api/unlock-character
pub async fn unlock(
    State(state): State<AppState>,
    AppJson(input): AppJson<UnlockRequest>,
) -> AppResult<Json<CollectibleResponse>> {
    let collectible = services::unlock::unlock(&state.pool, &input.serial_number).await?;
    Ok(Json(collectible.into()))
}
