//! Category filtering and the derived category/project selections used by
//! the home and list pages.

use crate::catalog::{Category, Project, ALL_CATEGORY_ID};

/// Maximum number of projects on the home page featured strip.
pub const FEATURED_LIMIT: usize = 6;

/// Projects belonging to `category_key`, in catalog order.
///
/// The `"all"` key returns every project. An unknown key yields an empty
/// result rather than an error.
pub fn filter_projects<'a>(all: &'a [Project], category_key: &str) -> Vec<&'a Project> {
    if category_key == ALL_CATEGORY_ID {
        return all.iter().collect();
    }
    all.iter().filter(|p| p.category == category_key).collect()
}

/// Featured projects in catalog order, at most `limit`.
pub fn featured_projects(all: &[Project], limit: usize) -> Vec<&Project> {
    all.iter().filter(|p| p.featured).take(limit).collect()
}

/// Categories shown as tiles on the home page (everything but `"all"`).
pub fn visible_categories(categories: &[Category]) -> Vec<&Category> {
    categories.iter().filter(|c| !c.is_all()).collect()
}

/// Tab set for the list page.
///
/// Always starts with an `"all"` tab: catalogs that omit the sentinel get a
/// synthetic one so the unfiltered view stays selectable.
pub fn category_tabs(categories: &[Category]) -> Vec<Category> {
    if categories.iter().any(Category::is_all) {
        return categories.to_vec();
    }

    let mut tabs = Vec::with_capacity(categories.len() + 1);
    tabs.push(Category {
        id: ALL_CATEGORY_ID.to_string(),
        name: "ALL".to_string(),
        name_kr: "전체".to_string(),
    });
    tabs.extend(categories.iter().cloned());
    tabs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_catalog;

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn all_key_returns_everything_in_order() {
        let catalog = fallback_catalog();
        let result = filter_projects(&catalog.projects, "all");
        let expected: Vec<&Project> = catalog.projects.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn category_key_keeps_relative_order() {
        let catalog = fallback_catalog();
        let result = filter_projects(&catalog.projects, "cafe");
        assert_eq!(ids(&result), vec!["project-001", "project-008"]);
    }

    #[test]
    fn every_category_only_yields_its_own_projects() {
        let catalog = fallback_catalog();
        for category in &catalog.categories {
            if category.is_all() {
                continue;
            }
            let result = filter_projects(&catalog.projects, &category.id);
            assert!(!result.is_empty());
            assert!(result.iter().all(|p| p.category == category.id));
        }
    }

    #[test]
    fn unknown_key_is_empty() {
        let catalog = fallback_catalog();
        assert!(filter_projects(&catalog.projects, "nonexistent").is_empty());
    }

    #[test]
    fn featured_is_capped_and_filtered() {
        let catalog = fallback_catalog();
        let featured = featured_projects(&catalog.projects, FEATURED_LIMIT);
        assert_eq!(featured.len(), FEATURED_LIMIT);
        assert!(featured.iter().all(|p| p.featured));
        assert_eq!(featured[0].id, "project-001");

        assert_eq!(featured_projects(&catalog.projects, 2).len(), 2);
    }

    #[test]
    fn home_grid_excludes_all() {
        let catalog = fallback_catalog();
        let visible = visible_categories(&catalog.categories);
        assert_eq!(visible.len(), catalog.categories.len() - 1);
        assert!(visible.iter().all(|c| !c.is_all()));
    }

    #[test]
    fn tabs_prepend_all_when_missing() {
        let catalog = fallback_catalog();
        let without_all: Vec<Category> = catalog
            .categories
            .iter()
            .filter(|c| !c.is_all())
            .cloned()
            .collect();

        let tabs = category_tabs(&without_all);
        assert_eq!(tabs[0].id, "all");
        assert_eq!(tabs.len(), without_all.len() + 1);

        let tabs = category_tabs(&catalog.categories);
        assert_eq!(tabs, catalog.categories);
    }
}
