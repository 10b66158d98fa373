//! Route definitions for the catalog JSON API.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/api/v1`.
///
/// ```text
/// GET    /catalog           -> get_catalog
/// GET    /projects          -> list_projects (?category=)
/// GET    /projects/{id}     -> get_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog::get_catalog))
        .route("/projects", get(catalog::list_projects))
        .route("/projects/{id}", get(catalog::get_project))
}
