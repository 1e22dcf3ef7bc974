//! Bookkeeping for a seed population run.

use serde::Serialize;

/// Tally of what a seed run did with each descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// The table already had rows, so no descriptor was examined.
    pub table_was_populated: bool,
    pub created: usize,
    /// Descriptors whose `character_id` or `nfc_tag_id` already existed.
    pub skipped_existing: usize,
    /// Descriptors that failed to parse or validate.
    pub invalid: usize,
}

impl SeedReport {
    /// Report for a run that found the table non-empty.
    pub fn already_populated() -> Self {
        Self {
            table_was_populated: true,
            ..Self::default()
        }
    }

    /// Number of descriptors examined.
    pub fn examined(&self) -> usize {
        self.created + self.skipped_existing + self.invalid
    }

    /// Number of descriptors not inserted, for whatever reason.
    pub fn skipped(&self) -> usize {
        self.skipped_existing + self.invalid
    }
}
