//! Full page renderers.

use atelier_core::catalog::Catalog;
use atelier_core::contact::{ContactForm, SubmitControl};
use atelier_core::detail::DetailView;
use atelier_core::filter::{featured_projects, visible_categories, FEATURED_LIMIT};
use atelier_core::navigation::ListView;

use super::cards::{category_card, category_tab, detail_href, project_cards};
use super::{html_escape, layout, NavItem};

const SITE_TITLE: &str = "DESIGN STUDIO";

/// Project types offered in the contact form select.
const PROJECT_TYPES: &[(&str, &str)] = &[
    ("restaurant", "레스토랑"),
    ("cafe", "카페"),
    ("office", "오피스"),
    ("hospital", "병원"),
    ("gym", "피트니스"),
    ("apt", "주거공간"),
    ("showroom", "쇼룸"),
    ("other", "기타"),
];

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

/// Category grid plus the featured strip.
pub fn home_page(catalog: &Catalog) -> String {
    let tiles: Vec<String> = visible_categories(&catalog.categories)
        .into_iter()
        .map(category_card)
        .collect();
    let featured = featured_projects(&catalog.projects, FEATURED_LIMIT);

    let body = format!(
        r#"<section class="section">
  <h2 class="section-title">CATEGORY</h2>
  <div class="category-grid" id="categoryGrid">
{tiles}
  </div>
</section>
<section class="section">
  <h2 class="section-title">FEATURED PROJECTS</h2>
  <div class="projects-grid" id="featuredProjects">
{cards}
  </div>
  <a href="/projects" class="btn">VIEW ALL</a>
</section>"#,
        tiles = tiles.join("\n"),
        cards = project_cards(&featured),
    );

    layout(SITE_TITLE, NavItem::Home, &body)
}

// ---------------------------------------------------------------------------
// Project list
// ---------------------------------------------------------------------------

pub fn list_page(view: &ListView<'_>) -> String {
    let tabs: Vec<String> = view.tabs.iter().map(category_tab).collect();
    let empty_attr = if view.is_empty() { "" } else { " hidden" };

    let body = format!(
        r#"<section class="section">
  <h1 class="page-title">PROJECTS</h1>
  <div class="category-tabs" id="categoryTabs" data-active="{active}">
{tabs}
  </div>
  <div class="projects-grid" id="projectsGrid">
{cards}
  </div>
  <div class="empty-state" id="emptyState"{empty_attr}>
    <p>해당 카테고리의 프로젝트가 없습니다.</p>
  </div>
</section>"#,
        active = html_escape(view.active.as_str()),
        tabs = tabs.join("\n"),
        cards = project_cards(&view.projects),
    );

    layout(&format!("PROJECTS | {SITE_TITLE}"), NavItem::Projects, &body)
}

// ---------------------------------------------------------------------------
// Project detail
// ---------------------------------------------------------------------------

pub fn detail_page(view: &DetailView<'_>) -> String {
    let project = view.project;

    let gallery = if project.images.is_empty() {
        String::new()
    } else {
        let items: Vec<String> = project
            .images
            .iter()
            .map(|src| {
                format!(
                    r#"    <div class="project-gallery-item"><img src="{}" alt="{}" loading="lazy"></div>"#,
                    html_escape(src),
                    html_escape(&project.title),
                )
            })
            .collect();
        format!(
            "  <div class=\"project-gallery\" id=\"projectGallery\">\n{}\n  </div>\n",
            items.join("\n")
        )
    };

    let description = project
        .description
        .as_deref()
        .map(|d| {
            format!(
                "  <p class=\"project-description\" id=\"projectDescription\">{}</p>\n",
                html_escape(d)
            )
        })
        .unwrap_or_default();

    let prev = view
        .adjacent
        .previous
        .map(|p| {
            format!(
                r#"<a href="{}" class="project-nav-link prev" id="prevProject"><span>PREV</span><span id="prevProjectTitle">{}</span></a>"#,
                html_escape(&detail_href(&p.id)),
                html_escape(&p.title),
            )
        })
        .unwrap_or_default();

    let next = view
        .adjacent
        .next
        .map(|p| {
            format!(
                r#"<a href="{}" class="project-nav-link next" id="nextProject"><span>NEXT</span><span id="nextProjectTitle">{}</span></a>"#,
                html_escape(&detail_href(&p.id)),
                html_escape(&p.title),
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"<article class="project-detail">
  <span class="project-detail-category" id="projectCategory">{category}</span>
  <h1 class="project-detail-title" id="projectTitle">{title}</h1>
  <dl class="project-meta">
    <dt>LOCATION</dt><dd id="projectLocation">{location}</dd>
    <dt>AREA</dt><dd id="projectArea">{area}</dd>
    <dt>YEAR</dt><dd id="projectYear">{year}</dd>
  </dl>
{gallery}{description}  <nav class="project-nav">
    {prev}
    <a href="/projects" class="project-nav-list">LIST</a>
    {next}
  </nav>
</article>"#,
        category = html_escape(&project.category_label()),
        title = html_escape(&project.title),
        location = html_escape(&project.location),
        area = html_escape(&project.area),
        year = html_escape(&project.year),
    );

    layout(&view.page_title(), NavItem::Projects, &body)
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// Contact form, or the success message once a submission succeeded.
///
/// Entered values are written back into the inputs so a failed attempt
/// keeps the user's text.
pub fn contact_page(form: &ContactForm, control: &SubmitControl) -> String {
    let title = format!("CONTACT | {SITE_TITLE}");

    if !control.form_visible() {
        let body = r#"<section class="section">
  <div class="success-message" id="successMessage">
    <h2>문의가 접수되었습니다.</h2>
    <p>빠른 시일 내에 연락드리겠습니다.</p>
  </div>
</section>"#;
        return layout(&title, NavItem::Contact, body);
    }

    let value = |v: &Option<String>| html_escape(v.as_deref().unwrap_or_default());

    let alert = control
        .alert()
        .map(|a| format!(r#"  <div class="form-alert" role="alert">{}</div>"#, html_escape(a)))
        .unwrap_or_default();

    let selected_type = form.project_type.as_deref().unwrap_or_default();
    let options: String = PROJECT_TYPES
        .iter()
        .map(|(id, label)| {
            let selected = if *id == selected_type { " selected" } else { "" };
            format!(r#"<option value="{id}"{selected}>{label}</option>"#)
        })
        .collect();

    let disabled = if control.is_enabled() { "" } else { " disabled" };

    let body = format!(
        r#"<section class="section">
  <h1 class="page-title">CONTACT</h1>
{alert}
  <form class="contact-form" id="contactForm" method="post" action="/contact">
    <label>이름 *<input type="text" name="name" id="name" value="{name}"></label>
    <label>연락처 *<input type="tel" name="phone" id="phone" value="{phone}"></label>
    <label>이메일<input type="email" name="email" id="email" value="{email}"></label>
    <label>프로젝트 유형<select name="projectType" id="projectType"><option value="">선택</option>{options}</select></label>
    <label>문의 내용 *<textarea name="message" id="message">{message}</textarea></label>
    <button type="submit" class="btn"{disabled}>{label}</button>
  </form>
</section>"#,
        name = value(&form.name),
        phone = value(&form.phone),
        email = value(&form.email),
        message = value(&form.message),
        label = control.button_label(),
    );

    layout(&title, NavItem::Contact, &body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
