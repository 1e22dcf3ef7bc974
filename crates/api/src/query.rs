//! Query parameter types for API handlers.

use serde::Deserialize;

/// Offset pagination parameters (`?skip=&limit=`).
///
/// Values are clamped with `collectibles_core::pagination` before they
/// reach the repository.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
