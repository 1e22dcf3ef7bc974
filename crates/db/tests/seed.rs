//! Integration tests for the startup seed loader.

use std::io::Write;

use assert_matches::assert_matches;
use collectibles_db::repositories::CollectibleRepo;
use collectibles_db::seed::{self, SeedError};
use serde_json::{json, Value};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn descriptor(character_id: i64, nfc_tag_id: &str) -> Value {
    json!({
        "character_id": character_id,
        "name": format!("Character {character_id}"),
        "store_section": "Bakery",
        "model_3d_path": format!("models/{character_id}.glb"),
        "riddle_hint": "Crusty outside, soft inside",
        "product_information": "Baked fresh every morning",
        "food_waste_tip": "Freeze leftover slices",
        "nfc_tag_id": nfc_tag_id,
    })
}

fn write_seed_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ---------------------------------------------------------------------------
// Empty-table population
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn populates_empty_table_in_source_order(pool: SqlitePool) {
    let report = seed::populate(&pool, vec![descriptor(2, "b"), descriptor(1, "a")])
        .await
        .unwrap();

    assert!(!report.table_was_populated);
    assert_eq!(report.created, 2);
    assert_eq!(report.skipped(), 0);

    let ids: Vec<i64> = CollectibleRepo::list(&pool, 0, 10)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.character_id)
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_nfc_tag_in_batch_inserts_once(pool: SqlitePool) {
    let report = seed::populate(&pool, vec![descriptor(1, "same"), descriptor(2, "same")])
        .await
        .unwrap();

    assert_eq!(report.created, 1);
    assert_eq!(report.skipped_existing, 1);
    assert_eq!(CollectibleRepo::count(&pool).await.unwrap(), 1);

    let kept = CollectibleRepo::find_by_nfc_tag_id(&pool, "same")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.character_id, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_character_id_in_batch_inserts_once(pool: SqlitePool) {
    let report = seed::populate(&pool, vec![descriptor(1, "x"), descriptor(1, "y")])
        .await
        .unwrap();

    assert_eq!(report.created, 1);
    assert_eq!(report.skipped_existing, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn invalid_descriptor_does_not_abort_batch(pool: SqlitePool) {
    let mut missing_name = descriptor(2, "b");
    missing_name.as_object_mut().unwrap().remove("name");

    let mut empty_tag = descriptor(3, "c");
    empty_tag["nfc_tag_id"] = json!("");

    let report = seed::populate(
        &pool,
        vec![
            descriptor(1, "a"),
            missing_name,
            json!("not an object"),
            empty_tag,
            descriptor(4, "d"),
        ],
    )
    .await
    .unwrap();

    assert_eq!(report.created, 2);
    assert_eq!(report.invalid, 3);
    assert_eq!(report.examined(), 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn accepts_wire_alias_for_model_path(pool: SqlitePool) {
    let mut aliased = descriptor(1, "a");
    let fields = aliased.as_object_mut().unwrap();
    let path = fields.remove("model_3d_path").unwrap();
    fields.insert("_3d_model_path".to_string(), path);

    seed::populate(&pool, vec![aliased]).await.unwrap();

    let stored = CollectibleRepo::find_by_character_id(&pool, 1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.model_3d_path, "models/1.glb");
}

#[sqlx::test(migrations = "./migrations")]
async fn honours_optional_unlock_flag(pool: SqlitePool) {
    let mut unlocked = descriptor(2, "b");
    unlocked["is_unlocked"] = json!(true);

    seed::populate(&pool, vec![descriptor(1, "a"), unlocked])
        .await
        .unwrap();

    let a = CollectibleRepo::find_by_nfc_tag_id(&pool, "a").await.unwrap().unwrap();
    let b = CollectibleRepo::find_by_nfc_tag_id(&pool, "b").await.unwrap().unwrap();
    assert!(!a.is_unlocked);
    assert!(b.is_unlocked);
}

#[sqlx::test(migrations = "./migrations")]
async fn lenient_scalars_are_accepted(pool: SqlitePool) {
    let mut null_flag = descriptor(1, "a");
    null_flag["is_unlocked"] = Value::Null;
    let mut float_id = descriptor(2, "b");
    float_id["character_id"] = json!(2.0);

    let report = seed::populate(&pool, vec![null_flag, float_id])
        .await
        .unwrap();

    assert_eq!(report.created, 2);
    assert_eq!(report.invalid, 0);
    let a = CollectibleRepo::find_by_nfc_tag_id(&pool, "a").await.unwrap().unwrap();
    assert!(!a.is_unlocked);
    assert!(CollectibleRepo::find_by_character_id(&pool, 2)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn rerun_on_populated_table_inserts_nothing(pool: SqlitePool) {
    seed::populate(&pool, vec![descriptor(1, "a")]).await.unwrap();

    let report = seed::populate(&pool, vec![descriptor(2, "b"), descriptor(3, "c")])
        .await
        .unwrap();

    assert!(report.table_was_populated);
    assert_eq!(report.created, 0);
    assert_eq!(CollectibleRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn rerun_preserves_unlock_progress(pool: SqlitePool) {
    seed::populate(&pool, vec![descriptor(1, "a")]).await.unwrap();
    CollectibleRepo::mark_unlocked_by_nfc_tag_id(&pool, "a")
        .await
        .unwrap();

    seed::populate(&pool, vec![descriptor(1, "a")]).await.unwrap();

    let stored = CollectibleRepo::find_by_nfc_tag_id(&pool, "a").await.unwrap().unwrap();
    assert!(stored.is_unlocked);
}

// ---------------------------------------------------------------------------
// File source
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn populates_from_file(pool: SqlitePool) {
    let contents = Value::Array(vec![descriptor(1, "a"), descriptor(2, "b")]).to_string();
    let file = write_seed_file(&contents);

    let report = seed::populate_from_file(&pool, file.path()).await.unwrap();

    assert_eq!(report.created, 2);
    assert_eq!(CollectibleRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn missing_file_is_reported(pool: SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = seed::populate_from_file(&pool, &path).await.unwrap_err();

    assert_matches!(err, SeedError::MissingFile(p) if p == path);
    assert_eq!(CollectibleRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn missing_file_is_ignored_once_populated(pool: SqlitePool) {
    seed::populate(&pool, vec![descriptor(1, "a")]).await.unwrap();
    let dir = tempfile::tempdir().unwrap();

    let report = seed::populate_from_file(&pool, &dir.path().join("absent.json"))
        .await
        .unwrap();

    assert!(report.table_was_populated);
}

#[sqlx::test(migrations = "./migrations")]
async fn non_array_file_is_parse_error(pool: SqlitePool) {
    let file = write_seed_file(r#"{"character_id": 1}"#);

    let err = seed::populate_from_file(&pool, file.path()).await.unwrap_err();

    assert_matches!(err, SeedError::Parse { .. });
}

// ---------------------------------------------------------------------------
// Descriptor parsing
// ---------------------------------------------------------------------------

#[test]
fn parse_descriptor_rejects_conflicting_aliases() {
    let mut raw = descriptor(1, "a");
    raw["_3d_model_path"] = json!("models/other.glb");

    let err = seed::parse_descriptor(raw).unwrap_err();
    assert_matches!(err, seed::DescriptorError::Shape(_));
}

#[test]
fn parse_descriptor_rejects_wrong_types() {
    let mut raw = descriptor(1, "a");
    raw["character_id"] = json!("one hundred");

    let err = seed::parse_descriptor(raw).unwrap_err();
    assert_matches!(err, seed::DescriptorError::Decode(_));
}

#[test]
fn parse_descriptor_rejects_non_positive_id() {
    let err = seed::parse_descriptor(descriptor(0, "a")).unwrap_err();
    assert_matches!(err, seed::DescriptorError::Invalid(_));
}
