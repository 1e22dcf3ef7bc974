//! Collectibles API server library.
//!
//! Exposes config, state, error handling, routes and services so integration
//! tests and the binary entrypoint share the same building blocks.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
