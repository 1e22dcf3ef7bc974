//! Row types and input DTOs.

pub mod collectible;
