use std::sync::Arc;

use crate::catalog_loader::CatalogLoader;
use crate::config::ServerConfig;
use crate::submitter::Submitter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Catalog source; handlers load the catalog once per request.
    pub catalog: Arc<CatalogLoader>,
    /// Contact inquiry delivery.
    pub submitter: Arc<dyn Submitter>,
}
