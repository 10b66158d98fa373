//! Markup fragments: project cards, category tiles and tabs.

use atelier_core::catalog::{Category, Project};
use atelier_core::navigation::{CategoryKey, CategoryTab, Location, LIST_PATH};

use super::html_escape;

/// Path of the detail page.
pub const DETAIL_PATH: &str = "/projects/detail";

/// Detail page link for a project.
pub fn detail_href(project_id: &str) -> String {
    format!("{DETAIL_PATH}?id={}", urlencoding::encode(project_id))
}

/// Tile image for a category.
pub fn category_image_src(category_id: &str) -> String {
    format!(
        "/static/images/categories/{}.svg",
        urlencoding::encode(category_id)
    )
}

pub fn project_card(project: &Project) -> String {
    format!(
        r#"<a href="{href}" class="project-card">
  <div class="project-card-image">
    <img src="{thumbnail}" alt="{title}" loading="lazy">
  </div>
  <div class="project-card-content">
    <span class="project-card-category">{category}</span>
    <h3 class="project-card-title">{title}</h3>
    <div class="project-card-meta">
      <span>{location}</span>
      <span>{area}</span>
    </div>
  </div>
</a>"#,
        href = html_escape(&detail_href(&project.id)),
        thumbnail = html_escape(&project.thumbnail),
        title = html_escape(&project.title),
        category = html_escape(&project.category_label()),
        location = html_escape(&project.location),
        area = html_escape(&project.area),
    )
}

/// Concatenated cards for a project sequence.
pub fn project_cards(projects: &[&Project]) -> String {
    projects.iter().map(|p| project_card(p)).collect::<Vec<_>>().join("\n")
}

/// Home page tile linking to the list filtered by `category`.
pub fn category_card(category: &Category) -> String {
    let href = Location::new(LIST_PATH)
        .with_category(&CategoryKey::new(category.id.clone()))
        .to_string();

    format!(
        r#"<a href="{href}" class="category-card">
  <div class="category-card-image">
    <img src="{src}" alt="{name_kr}" loading="lazy">
  </div>
  <div class="category-card-overlay"></div>
  <div class="category-card-content">
    <span class="category-card-name text-english">{name}</span>
    <span class="category-card-name-kr">{name_kr}</span>
  </div>
</a>"#,
        href = html_escape(&href),
        src = html_escape(&category_image_src(&category.id)),
        name = html_escape(&category.name),
        name_kr = html_escape(&category.name_kr),
    )
}

/// List page tab. The `"all"` tab has no image.
pub fn category_tab(tab: &CategoryTab) -> String {
    let category = &tab.category;
    let mut class = String::from("category-tab");
    let image = if category.is_all() {
        String::new()
    } else {
        class.push_str(" has-image");
        format!(
            r#"<img src="{}" alt="{}" class="category-tab-image">"#,
            html_escape(&category_image_src(&category.id)),
            html_escape(&category.name_kr),
        )
    };
    if tab.active {
        class.push_str(" active");
    }
    let current = if tab.active { r#" aria-current="page""# } else { "" };

    format!(
        r#"<a href="{href}" class="{class}" data-category="{id}" aria-label="{name_kr} 카테고리"{current}>
  {image}
  <span class="category-tab-text">{name_kr}</span>
</a>"#,
        href = html_escape(&tab.href),
        id = html_escape(&category.id),
        name_kr = html_escape(&category.name_kr),
    )
}
