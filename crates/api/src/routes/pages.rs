//! Route definitions for the HTML pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::{contact, pages};
use crate::state::AppState;

/// Routes mounted at the site root.
///
/// ```text
/// GET    /                  -> home
/// GET    /projects          -> projects (?category=)
/// GET    /projects/detail   -> detail (?id=)
/// GET    /contact           -> form
/// POST   /contact           -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/projects", get(pages::projects))
        .route("/projects/detail", get(pages::detail))
        .route("/contact", get(contact::form).post(contact::submit))
}
