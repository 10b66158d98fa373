//! Atelier site server library.
//!
//! Exposes the building blocks (config, state, catalog loading, rendering,
//! handlers, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod catalog_loader;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod render;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod submitter;
