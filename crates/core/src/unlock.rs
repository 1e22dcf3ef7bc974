//! Unlock state transition.
//!
//! `is_unlocked` only ever moves from `false` to `true`. Re-applying the
//! transition to an unlocked collectible is a no-op, not an error.

use serde::Serialize;

/// Result of applying the unlock transition to an existing collectible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockOutcome {
    /// The collectible was locked and is now unlocked.
    Unlocked,
    /// The collectible was already unlocked; nothing was written.
    AlreadyUnlocked,
}

impl UnlockOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unlocked => "unlocked",
            Self::AlreadyUnlocked => "already_unlocked",
        }
    }

    /// Whether this outcome changed persisted state.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Unlocked)
    }
}
