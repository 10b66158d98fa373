//! JSON handlers for the catalog API (`/api/v1`).

use atelier_core::catalog::{Catalog, Project};
use atelier_core::detail::adjacent;
use atelier_core::error::CoreError;
use atelier_core::navigation::{ListView, Location, LIST_PATH};
use axum::extract::{OriginalUri, Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::request_location;
use crate::response::DataResponse;
use crate::state::AppState;

/// Filtered project list payload.
#[derive(Debug, Serialize)]
pub struct ProjectList {
    pub category: String,
    pub projects: Vec<Project>,
}

/// Single project with its neighbours.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub previous: Option<Project>,
    pub next: Option<Project>,
}

/// GET /api/v1/catalog
pub async fn get_catalog(State(state): State<AppState>) -> Json<DataResponse<Catalog>> {
    let catalog = state.catalog.load_or_fallback().await;
    Json(DataResponse { data: catalog })
}

/// GET /api/v1/projects?category=
pub async fn list_projects(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Json<DataResponse<ProjectList>> {
    let catalog = state.catalog.load_or_fallback().await;
    let key = request_location(&uri).category();
    let location = Location::new(LIST_PATH).with_category(&key);
    let view = ListView::resolve(&catalog, &location);

    Json(DataResponse {
        data: ProjectList {
            category: view.active.to_string(),
            projects: view.projects.into_iter().cloned().collect(),
        },
    })
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let catalog = state.catalog.load_or_fallback().await;
    let project = catalog
        .find_project(&id)
        .cloned()
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: id.clone(),
            })
        })?;
    let neighbours = adjacent(&catalog.projects, &id);

    Ok(Json(DataResponse {
        data: ProjectDetail {
            project,
            previous: neighbours.previous.cloned(),
            next: neighbours.next.cloned(),
        },
    }))
}
