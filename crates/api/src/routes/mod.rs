pub mod catalog;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// All JSON API routes, nested under `/api/v1` by the router builder.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(catalog::router())
}
