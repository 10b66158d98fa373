//! HTML rendering for the site pages.
//!
//! Renderers are pure functions from domain views to markup. Element ids
//! (`projectsGrid`, `emptyState`, `projectTitle`, ...) are stable hooks for
//! stylesheets and scripts.

pub mod cards;
pub mod pages;

/// Top-level navigation entry highlighted in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Projects,
    Contact,
}

const NAV_LINKS: &[(NavItem, &str, &str)] = &[
    (NavItem::Home, "/", "HOME"),
    (NavItem::Projects, "/projects", "PROJECTS"),
    (NavItem::Contact, "/contact", "CONTACT"),
];

/// Escape text for use in element content and quoted attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared document shell.
pub fn layout(title: &str, active: NavItem, body: &str) -> String {
    let nav: String = NAV_LINKS
        .iter()
        .map(|(item, href, label)| {
            let class = if *item == active {
                "nav-link active"
            } else {
                "nav-link"
            };
            format!(r#"<a href="{href}" class="{class}">{label}</a>"#)
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
    <header class="header" id="header">
        <a href="/" class="logo">DESIGN STUDIO</a>
        <nav class="nav" id="nav">{nav}</nav>
    </header>
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = html_escape(title),
    )
}
