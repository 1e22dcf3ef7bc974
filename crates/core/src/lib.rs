//! Domain logic for the collectibles service.
//!
//! Everything here is pure: no database, no HTTP, no async. The `db` and
//! `api` crates build on these types.

pub mod error;
pub mod pagination;
pub mod seed;
pub mod types;
pub mod unlock;
pub mod wire;
