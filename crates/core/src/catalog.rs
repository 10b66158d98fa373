//! Catalog model: categories and the ordered project sequence.
//!
//! The catalog is read-only once loaded. Its JSON shape is
//! `{ "categories": [...], "projects": [...] }` with camelCase field names
//! (`nameKr`), so the same document can be served to browsers unchanged.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Reserved category id selecting every project.
pub const ALL_CATEGORY_ID: &str = "all";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub name_kr: String,
}

impl Category {
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    /// References [`Category::id`].
    pub category: String,
    pub location: String,
    pub area: String,
    pub year: String,
    pub thumbnail: String,
    #[serde(default)]
    pub featured: bool,
    /// Gallery images in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    /// Category label as shown on cards and the detail header.
    pub fn category_label(&self) -> String {
        self.category.to_uppercase()
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Order defines previous/next adjacency on the detail page.
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Parse a catalog document.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str(raw)
            .map_err(|e| CoreError::Validation(format!("invalid catalog document: {e}")))
    }

    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Structural problems that do not prevent rendering.
    ///
    /// Reports duplicate category ids, duplicate project ids and projects
    /// pointing at an unknown category. An empty result means the catalog is
    /// consistent.
    pub fn integrity_issues(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                issues.push(CatalogIssue::DuplicateCategory(category.id.clone()));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !project_ids.insert(project.id.as_str()) {
                issues.push(CatalogIssue::DuplicateProject(project.id.clone()));
            }
            if !category_ids.contains(project.category.as_str()) {
                issues.push(CatalogIssue::UnknownCategory {
                    project: project.id.clone(),
                    category: project.category.clone(),
                });
            }
        }

        issues
    }
}

/// A consistency problem found by [`Catalog::integrity_issues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateCategory(String),
    DuplicateProject(String),
    UnknownCategory { project: String, category: String },
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogIssue::DuplicateCategory(id) => write!(f, "duplicate category id '{id}'"),
            CatalogIssue::DuplicateProject(id) => write!(f, "duplicate project id '{id}'"),
            CatalogIssue::UnknownCategory { project, category } => {
                write!(f, "project '{project}' references unknown category '{category}'")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Embedded fallback
// ---------------------------------------------------------------------------

fn category(id: &str, name: &str, name_kr: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        name_kr: name_kr.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    category: &str,
    location: &str,
    area: &str,
    year: &str,
    thumbnail: &str,
    featured: bool,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        area: area.to_string(),
        year: year.to_string(),
        thumbnail: thumbnail.to_string(),
        featured,
        images: Vec::new(),
        description: None,
    }
}

/// Catalog used when the configured source cannot be loaded.
pub fn fallback_catalog() -> Catalog {
    Catalog {
        categories: vec![
            category(ALL_CATEGORY_ID, "ALL", "전체"),
            category("restaurant", "RESTAURANT", "레스토랑"),
            category("cafe", "CAFE", "카페"),
            category("office", "OFFICE", "오피스"),
            category("hospital", "HOSPITAL", "병원"),
            category("gym", "GYM", "피트니스"),
            category("apt", "APT", "주거공간"),
            category("showroom", "SHOWROOM", "쇼룸"),
        ],
        projects: vec![
            project(
                "project-001",
                "카페 블루밍",
                "cafe",
                "서울 성수동",
                "82㎡",
                "2024",
                "https://images.unsplash.com/photo-1554118811-1e0d58224f24?w=800&q=80",
                true,
            ),
            project(
                "project-002",
                "레스토랑 소울",
                "restaurant",
                "서울 청담동",
                "156㎡",
                "2024",
                "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800&q=80",
                true,
            ),
            project(
                "project-003",
                "오피스 넥스트",
                "office",
                "서울 강남구",
                "320㎡",
                "2024",
                "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&q=80",
                true,
            ),
            project(
                "project-004",
                "피트니스 바디웍스",
                "gym",
                "서울 삼성동",
                "245㎡",
                "2023",
                "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=800&q=80",
                true,
            ),
            project(
                "project-005",
                "힐링 클리닉",
                "hospital",
                "서울 서초구",
                "198㎡",
                "2023",
                "https://images.unsplash.com/photo-1519494026892-80bbd2d6fd0d?w=800&q=80",
                false,
            ),
            project(
                "project-006",
                "아파트 리모델링",
                "apt",
                "서울 용산구",
                "132㎡",
                "2024",
                "https://images.unsplash.com/photo-1600210492493-0946911123ea?w=800&q=80",
                true,
            ),
            project(
                "project-007",
                "브랜드 쇼룸",
                "showroom",
                "서울 한남동",
                "176㎡",
                "2023",
                "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800&q=80",
                true,
            ),
            project(
                "project-008",
                "카페 선셋",
                "cafe",
                "제주 서귀포",
                "95㎡",
                "2023",
                "https://images.unsplash.com/photo-1453614512568-c4024d13c247?w=800&q=80",
                false,
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
