pub mod collectible;
pub mod health;
