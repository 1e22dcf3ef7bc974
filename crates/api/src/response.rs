//! Outbound representations.
//!
//! This is where canonical storage names are mapped to wire names. The
//! renamed fields must match the names [`collectibles_core::wire`] accepts
//! on input, which the tests below check.

use collectibles_core::types::DbId;
use collectibles_db::models::collectible::Collectible;
use serde::Serialize;

/// JSON shape of a collectible.
#[derive(Debug, Clone, Serialize)]
pub struct CollectibleResponse {
    pub character_id: DbId,
    pub name: String,
    pub store_section: String,
    /// Exposed as `_3d_model_path` (`collectibles_core::wire::MODEL_3D_PATH_WIRE`).
    #[serde(rename = "_3d_model_path")]
    pub model_3d_path: String,
    pub riddle_hint: String,
    pub product_information: String,
    pub food_waste_tip: String,
    pub nfc_tag_id: String,
    pub is_unlocked: bool,
}

impl From<Collectible> for CollectibleResponse {
    fn from(row: Collectible) -> Self {
        Self {
            character_id: row.character_id,
            name: row.name,
            store_section: row.store_section,
            model_3d_path: row.model_3d_path,
            riddle_hint: row.riddle_hint,
            product_information: row.product_information,
            food_waste_tip: row.food_waste_tip,
            nfc_tag_id: row.nfc_tag_id,
            is_unlocked: row.is_unlocked,
        }
    }
}
