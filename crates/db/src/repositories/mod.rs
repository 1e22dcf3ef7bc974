//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod collectible_repo;

pub use collectible_repo::CollectibleRepo;
