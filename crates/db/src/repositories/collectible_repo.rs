//! Repository for the `collectibles` table.

use collectibles_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::collectible::{Collectible, CreateCollectible};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "character_id, name, store_section, model_3d_path, riddle_hint, \
                       product_information, food_waste_tip, nfc_tag_id, is_unlocked";

/// Lookup, listing and insert operations for collectibles.
pub struct CollectibleRepo;

impl CollectibleRepo {
    /// Insert a new collectible, returning the created row.
    ///
    /// A collision on `character_id` or `nfc_tag_id` fails with a database
    /// error for which `is_unique_violation()` is true.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateCollectible,
    ) -> Result<Collectible, sqlx::Error> {
        let query = format!(
            "INSERT INTO collectibles (character_id, name, store_section, model_3d_path, \
                riddle_hint, product_information, food_waste_tip, nfc_tag_id, is_unlocked) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collectible>(&query)
            .bind(input.character_id)
            .bind(&input.name)
            .bind(&input.store_section)
            .bind(&input.model_3d_path)
            .bind(&input.riddle_hint)
            .bind(&input.product_information)
            .bind(&input.food_waste_tip)
            .bind(&input.nfc_tag_id)
            .bind(input.is_unlocked)
            .fetch_one(pool)
            .await
    }

    /// Find a collectible by its primary key.
    pub async fn find_by_character_id(
        pool: &SqlitePool,
        character_id: DbId,
    ) -> Result<Option<Collectible>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collectibles WHERE character_id = ?");
        sqlx::query_as::<_, Collectible>(&query)
            .bind(character_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a collectible by the NFC tag attached to it.
    pub async fn find_by_nfc_tag_id(
        pool: &SqlitePool,
        nfc_tag_id: &str,
    ) -> Result<Option<Collectible>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collectibles WHERE nfc_tag_id = ?");
        sqlx::query_as::<_, Collectible>(&query)
            .bind(nfc_tag_id)
            .fetch_optional(pool)
            .await
    }

    /// List collectibles in insertion order.
    ///
    /// Callers clamp `skip` and `limit` beforehand; a `skip` past the end
    /// simply yields an empty page.
    pub async fn list(
        pool: &SqlitePool,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Collectible>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM collectibles ORDER BY rowid LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Collectible>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Total number of collectibles.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM collectibles")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Whether any row already uses `character_id` or `nfc_tag_id`.
    pub async fn exists_by_either_key(
        pool: &SqlitePool,
        character_id: DbId,
        nfc_tag_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (i64,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM collectibles WHERE character_id = ? OR nfc_tag_id = ?)",
        )
        .bind(character_id)
        .bind(nfc_tag_id)
        .fetch_one(pool)
        .await?;
        Ok(exists != 0)
    }

    /// Flip `is_unlocked` to true for the locked collectible carrying
    /// `nfc_tag_id`, returning the updated row.
    ///
    /// Returns `None` when no row matched: either the tag is unknown or the
    /// collectible is already unlocked. Of several concurrent callers for the
    /// same tag, at most one gets `Some`.
    pub async fn mark_unlocked_by_nfc_tag_id(
        pool: &SqlitePool,
        nfc_tag_id: &str,
    ) -> Result<Option<Collectible>, sqlx::Error> {
        let query = format!(
            "UPDATE collectibles SET is_unlocked = 1 \
             WHERE nfc_tag_id = ? AND is_unlocked = 0 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collectible>(&query)
            .bind(nfc_tag_id)
            .fetch_optional(pool)
            .await
    }
}
