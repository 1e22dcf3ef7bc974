//! Unlock service: the single user-facing write path.
//!
//! Given a scanned NFC tag, flips the matching collectible's `is_unlocked`
//! flag to true. Unlocking an already unlocked collectible returns it
//! unchanged. No other field is touched and no row is created or deleted.

use collectibles_core::error::CoreError;
use collectibles_core::unlock::UnlockOutcome;
use collectibles_db::models::collectible::Collectible;
use collectibles_db::repositories::CollectibleRepo;
use collectibles_db::DbPool;

use crate::error::AppResult;

/// Unlock the collectible carrying `nfc_tag_id`.
///
/// Fails with [`CoreError::NotFound`] when no collectible has that tag.
pub async fn unlock(pool: &DbPool, nfc_tag_id: &str) -> AppResult<Collectible> {
    let updated = CollectibleRepo::mark_unlocked_by_nfc_tag_id(pool, nfc_tag_id).await?;

    let (collectible, outcome) = match updated {
        Some(collectible) => (collectible, UnlockOutcome::Unlocked),
        // The guarded UPDATE misses a known tag only when it is already unlocked.
        None => {
            let existing = CollectibleRepo::find_by_nfc_tag_id(pool, nfc_tag_id)
                .await?
                .ok_or_else(|| CoreError::nfc_tag_not_found(nfc_tag_id))?;
            (existing, UnlockOutcome::AlreadyUnlocked)
        }
    };

    tracing::info!(
        character_id = collectible.character_id,
        nfc_tag_id = %nfc_tag_id,
        outcome = outcome.as_str(),
        written = outcome.is_write(),
        "Collectible unlock processed"
    );
    Ok(collectible)
}
