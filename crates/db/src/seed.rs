//! Startup population of the `collectibles` table from a static source.
//!
//! Population only runs against an empty table, so it is safe to invoke on
//! every process start: unlock progress is never overwritten. Within a run,
//! a descriptor is skipped when its `character_id` or `nfc_tag_id` is
//! already taken, and a malformed descriptor is logged and skipped without
//! aborting the rest of the batch.

use std::path::{Path, PathBuf};

use collectibles_core::error::CoreError;
use collectibles_core::seed::SeedReport;
use collectibles_core::wire;
use serde_json::Value;
use validator::Validate;

use crate::models::collectible::CreateCollectible;
use crate::repositories::CollectibleRepo;
use crate::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed file {} is not a JSON array: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("database error during seeding: {0}")]
    Database(#[from] sqlx::Error),
}

/// Why a single descriptor could not be turned into a [`CreateCollectible`].
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error(transparent)]
    Shape(#[from] CoreError),

    #[error("invalid field types: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid field values: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Resolve wire aliases, deserialize and validate one seed descriptor.
pub fn parse_descriptor(raw: Value) -> Result<CreateCollectible, DescriptorError> {
    let canonical = wire::canonicalize(raw)?;
    let input: CreateCollectible = serde_json::from_value(canonical)?;
    input.validate()?;
    Ok(input)
}

/// Populate from an in-memory list of descriptors.
pub async fn populate(pool: &DbPool, descriptors: Vec<Value>) -> Result<SeedReport, SeedError> {
    if table_is_populated(pool).await? {
        return Ok(SeedReport::already_populated());
    }
    insert_descriptors(pool, descriptors).await
}

/// Populate from a JSON file holding an array of descriptors.
///
/// The file is only read when the table is empty, so a missing file on a
/// populated store is not an error.
pub async fn populate_from_file(pool: &DbPool, path: &Path) -> Result<SeedReport, SeedError> {
    if table_is_populated(pool).await? {
        return Ok(SeedReport::already_populated());
    }
    let descriptors = read_descriptors(path).await?;
    tracing::info!(
        path = %path.display(),
        count = descriptors.len(),
        "Loaded seed descriptors"
    );
    insert_descriptors(pool, descriptors).await
}

async fn table_is_populated(pool: &DbPool) -> Result<bool, SeedError> {
    let count = CollectibleRepo::count(pool).await?;
    if count > 0 {
        tracing::info!(count, "Collectibles table already populated, skipping seed");
    }
    Ok(count > 0)
}

async fn read_descriptors(path: &Path) -> Result<Vec<Value>, SeedError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SeedError::MissingFile(path.to_path_buf()));
        }
        Err(source) => {
            return Err(SeedError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

async fn insert_descriptors(
    pool: &DbPool,
    descriptors: Vec<Value>,
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    for (index, raw) in descriptors.into_iter().enumerate() {
        let input = match parse_descriptor(raw) {
            Ok(input) => input,
            Err(error) => {
                tracing::warn!(index, %error, "Skipping invalid seed descriptor");
                report.invalid += 1;
                continue;
            }
        };

        if CollectibleRepo::exists_by_either_key(pool, input.character_id, &input.nfc_tag_id)
            .await?
        {
            tracing::info!(
                index,
                character_id = input.character_id,
                nfc_tag_id = %input.nfc_tag_id,
                "Skipping already existing collectible"
            );
            report.skipped_existing += 1;
            continue;
        }

        create_or_skip(pool, index, &input, &mut report).await?;
    }

    tracing::info!(
        created = report.created,
        skipped_existing = report.skipped_existing,
        invalid = report.invalid,
        "Seed population complete"
    );
    Ok(report)
}

/// Insert one descriptor, counting a unique violation as already existing.
///
/// Another writer can take a key between the existence check and the insert.
async fn create_or_skip(
    pool: &DbPool,
    index: usize,
    input: &CreateCollectible,
    report: &mut SeedReport,
) -> Result<(), SeedError> {
    match CollectibleRepo::create(pool, input).await {
        Ok(_) => report.created += 1,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!(
                index,
                character_id = input.character_id,
                nfc_tag_id = %input.nfc_tag_id,
                error = %db_err,
                "Unique constraint hit while seeding, skipping"
            );
            report.skipped_existing += 1;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
