//! Project detail lookup and previous/next navigation.

use crate::catalog::{Catalog, Project};

/// Neighbours of a project in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjacent<'a> {
    pub previous: Option<&'a Project>,
    pub next: Option<&'a Project>,
}

/// Previous and next projects around `current_id`.
///
/// Both are `None` when the id is not in the sequence.
pub fn adjacent<'a>(all: &'a [Project], current_id: &str) -> Adjacent<'a> {
    let Some(index) = all.iter().position(|p| p.id == current_id) else {
        return Adjacent::default();
    };

    Adjacent {
        previous: index.checked_sub(1).and_then(|i| all.get(i)),
        next: all.get(index + 1),
    }
}

/// Why a detail page could not be shown. Callers redirect to the list page
/// in both cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetailError {
    #[error("missing project id")]
    MissingId,
    #[error("unknown project id '{0}'")]
    UnknownId(String),
}

/// A project together with its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub project: &'a Project,
    pub adjacent: Adjacent<'a>,
}

impl<'a> DetailView<'a> {
    pub fn resolve(catalog: &'a Catalog, id: Option<&str>) -> Result<Self, DetailError> {
        let id = id.filter(|id| !id.is_empty()).ok_or(DetailError::MissingId)?;
        let project = catalog
            .find_project(id)
            .ok_or_else(|| DetailError::UnknownId(id.to_string()))?;

        Ok(Self {
            project,
            adjacent: adjacent(&catalog.projects, id),
        })
    }

    /// Document title of the detail page.
    pub fn page_title(&self) -> String {
        format!("{} | DESIGN STUDIO", self.project.title)
    }
}
