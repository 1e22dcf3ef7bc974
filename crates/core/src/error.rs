#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `entity` names the lookup key in user-facing terms ("Collectible",
    /// "NFC Tag"); `key` is the value that missed and is only logged.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// A miss on the `character_id` primary key.
    pub fn collectible_not_found(character_id: crate::types::DbId) -> Self {
        CoreError::NotFound {
            entity: "Collectible",
            key: character_id.to_string(),
        }
    }

    /// A miss on the `nfc_tag_id` secondary key.
    pub fn nfc_tag_not_found(nfc_tag_id: &str) -> Self {
        CoreError::NotFound {
            entity: "NFC Tag",
            key: nfc_tag_id.to_string(),
        }
    }
}
