//! Collectible entity model and DTOs.

use collectibles_core::types::DbId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `collectibles` table.
///
/// Field names are canonical storage names; wire naming is applied by the
/// API layer.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Collectible {
    pub character_id: DbId,
    pub name: String,
    pub store_section: String,
    pub model_3d_path: String,
    pub riddle_hint: String,
    pub product_information: String,
    pub food_waste_tip: String,
    pub nfc_tag_id: String,
    pub is_unlocked: bool,
}

/// DTO for inserting a collectible.
///
/// Expects canonical field names; run inbound JSON through
/// [`collectibles_core::wire::canonicalize`] before deserializing.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCollectible {
    #[validate(range(min = 1))]
    #[serde(deserialize_with = "integral_id")]
    pub character_id: DbId,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub store_section: String,
    #[validate(length(min = 1))]
    pub model_3d_path: String,
    pub riddle_hint: String,
    pub product_information: String,
    pub food_waste_tip: String,
    #[validate(length(min = 1))]
    pub nfc_tag_id: String,
    /// Defaults to locked; `null` also means locked.
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_unlocked: bool,
}

/// Accept integers and whole-number floats such as `2.0`.
fn integral_id<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(id) = number.as_i64() {
        return Ok(id);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as DbId)
        }
        _ => Err(D::Error::custom(format!("expected an integer, got {number}"))),
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}
