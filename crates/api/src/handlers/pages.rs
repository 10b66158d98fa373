//! Handlers for the HTML pages: home, project list and project detail.
//!
//! Each handler loads the catalog for this page view and derives everything
//! it renders from the request URL.

use atelier_core::detail::DetailView;
use atelier_core::navigation::{ListView, LIST_PATH};
use axum::extract::{OriginalUri, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::query::{request_location, ID_PARAM};
use crate::render::pages;
use crate::state::AppState;

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let catalog = state.catalog.load_or_fallback().await;
    Html(pages::home_page(&catalog))
}

/// GET /projects?category=
///
/// The active category comes from the request URL only, so reloads and
/// back/forward navigation render the same view for the same URL.
pub async fn projects(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Html<String> {
    let catalog = state.catalog.load_or_fallback().await;
    let location = request_location(&uri);
    let view = ListView::resolve(&catalog, &location);

    tracing::debug!(
        category = %view.active,
        count = view.projects.len(),
        "Rendering project list"
    );
    Html(pages::list_page(&view))
}

/// GET /projects/detail?id=
///
/// A missing or unknown id redirects to the project list. A repeated `id`
/// uses its first value.
pub async fn detail(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Response {
    let catalog = state.catalog.load_or_fallback().await;
    let location = request_location(&uri);
    match DetailView::resolve(&catalog, location.param(ID_PARAM)) {
        Ok(view) => Html(pages::detail_page(&view)).into_response(),
        Err(e) => {
            tracing::debug!(reason = %e, "Redirecting detail request to project list");
            Redirect::to(LIST_PATH).into_response()
        }
    }
}
