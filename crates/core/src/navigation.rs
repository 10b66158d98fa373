//! URL-derived navigation state for the project list.
//!
//! The active category lives only in the `category` query parameter of the
//! current [`Location`]. Everything the list page shows (active tab, cards,
//! empty state) is recomputed from that parameter by [`ListView::resolve`],
//! so a fresh load and a back/forward transition to the same location always
//! render the same view.

use std::fmt;

use crate::catalog::{Catalog, Category, Project, ALL_CATEGORY_ID};
use crate::filter::{category_tabs, filter_projects};

/// Query parameter carrying the active category key.
pub const CATEGORY_PARAM: &str = "category";

/// Path of the project list page.
pub const LIST_PATH: &str = "/projects";

// ---------------------------------------------------------------------------
// Category key
// ---------------------------------------------------------------------------

/// Identifier selecting a project subset; `"all"` is the wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn all() -> Self {
        Self(ALL_CATEGORY_ID.to_string())
    }

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key from an optional query value. Absent and empty values select
    /// `"all"`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::new(v),
            _ => Self::all(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_CATEGORY_ID
    }
}

impl Default for CategoryKey {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Path plus ordered query pairs of a page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Parse a path-and-query string such as `/projects?category=cafe`.
    ///
    /// Any fragment is dropped. Pairs without `=` get an empty value.
    pub fn parse(target: &str) -> Self {
        let target = target.split('#').next().unwrap_or_default();
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };

        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(k), decode_component(v))
            })
            .collect();

        Self {
            path: path.to_string(),
            query,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of query parameter `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Active category derived from the `category` parameter.
    pub fn category(&self) -> CategoryKey {
        CategoryKey::from_param(self.param(CATEGORY_PARAM))
    }

    /// Copy of this location selecting `key`.
    ///
    /// `"all"` removes the parameter; any other key replaces the existing
    /// value in place or appends it. Other parameters are untouched.
    pub fn with_category(&self, key: &CategoryKey) -> Self {
        let mut query: Vec<(String, String)> = self
            .query
            .iter()
            .filter(|(k, _)| k != CATEGORY_PARAM)
            .cloned()
            .collect();

        if !key.is_all() {
            let position = self
                .query
                .iter()
                .position(|(k, _)| k == CATEGORY_PARAM)
                .unwrap_or(query.len())
                .min(query.len());
            query.insert(position, (CATEGORY_PARAM.to_string(), key.as_str().to_string()));
        }

        Self {
            path: self.path.clone(),
            query,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (i, (k, v)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{}={}", urlencoding::encode(k), urlencoding::encode(v))?;
        }
        Ok(())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// Session history of visited locations, modelled on the browser's
/// push/back/forward semantics.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Push a new entry, discarding any forward entries.
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry. Returns `None` at the start of history.
    pub fn back(&mut self) -> Option<&Location> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Step forward one entry. Returns `None` at the end of history.
    pub fn forward(&mut self) -> Option<&Location> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// List view
// ---------------------------------------------------------------------------

/// One category tab on the list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub category: Category,
    pub active: bool,
    /// Location selecting this tab from the current one.
    pub href: String,
}

/// Everything the list page renders, derived from a single location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    pub active: CategoryKey,
    pub tabs: Vec<CategoryTab>,
    pub projects: Vec<&'a Project>,
}

impl<'a> ListView<'a> {
    pub fn resolve(catalog: &'a Catalog, location: &Location) -> Self {
        let active = location.category();
        let tabs = category_tabs(&catalog.categories)
            .into_iter()
            .map(|category| {
                let key = CategoryKey::new(category.id.clone());
                CategoryTab {
                    active: key == active,
                    href: location.with_category(&key).to_string(),
                    category,
                }
            })
            .collect();
        let projects = filter_projects(&catalog.projects, active.as_str());

        Self {
            active,
            tabs,
            projects,
        }
    }

    /// Whether the empty-state indicator replaces the grid.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn active_tab(&self) -> Option<&CategoryTab> {
        self.tabs.iter().find(|t| t.active)
    }
}

// ---------------------------------------------------------------------------
// List session
// ---------------------------------------------------------------------------

/// A list page bound to a catalog and a history stack.
///
/// Tab selection pushes a new entry; back/forward move through history. In
/// every case the view is re-derived from the current location only.
#[derive(Debug)]
pub struct ListSession<'a> {
    catalog: &'a Catalog,
    history: History,
}

impl<'a> ListSession<'a> {
    pub fn open(catalog: &'a Catalog, location: Location) -> Self {
        Self {
            catalog,
            history: History::new(location),
        }
    }

    pub fn location(&self) -> &Location {
        self.history.current()
    }

    pub fn view(&self) -> ListView<'a> {
        ListView::resolve(self.catalog, self.history.current())
    }

    pub fn select(&mut self, key: &CategoryKey) -> ListView<'a> {
        let next = self.history.current().with_category(key);
        self.history.push(next);
        self.view()
    }

    /// Browser back. Returns `None` when there is nowhere to go.
    pub fn back(&mut self) -> Option<ListView<'a>> {
        self.history.back()?;
        Some(self.view())
    }

    /// Browser forward. Returns `None` when there is nowhere to go.
    pub fn forward(&mut self) -> Option<ListView<'a>> {
        self.history.forward()?;
        Some(self.view())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
