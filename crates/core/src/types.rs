/// Collectible primary keys are SQLite INTEGER (64-bit).
pub type DbId = i64;
