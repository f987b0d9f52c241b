//! Navbar, footer and the page shell around them.

use chrono::Datelike;
use vibe_core::{html_escape, SiteConfig};
use vibe_streaming::{HeadContent, Shell};

use crate::routes::NavItem;
use crate::styles::SITE_STYLES;

/// Shell for a page: head, navbar and opening `<main>`, then footer.
///
/// `title` is suffixed with the site name unless it already is the site name.
pub fn page_shell(config: &SiteConfig, title: &str, description: &str, active: Option<NavItem>) -> Shell {
    let site = &config.site.name;
    let full_title = if title.is_empty() || title == site {
        site.clone()
    } else {
        format!("{} | {}", title, site)
    };

    let head = HeadContent::new(full_title)
        .with_description(description)
        .with_style(SITE_STYLES);

    Shell::new(head)
        .with_body_start(format!("<body>\n{}\n<main>\n", render_navbar(site, active)))
        .with_body_end(format!("\n</main>\n{}\n</body>\n</html>", render_footer(site)))
}

pub fn render_navbar(site_name: &str, active: Option<NavItem>) -> String {
    let links: String = NavItem::ALL
        .iter()
        .map(|item| {
            let (class, current) = if Some(*item) == active {
                ("nav-link active", r#" aria-current="page""#)
            } else {
                ("nav-link", "")
            };
            format!(
                r#"<a href="{}" class="{}"{}>{}</a>"#,
                item.href(),
                class,
                current,
                item.label()
            )
        })
        .collect();

    format!(
        r#"<nav class="navbar">
    <a href="/" class="logo">{}</a>
    <div class="nav-links">{}</div>
</nav>"#,
        render_logo(site_name),
        links
    )
}

/// First word highlighted, the rest plain, upper-cased.
fn render_logo(site_name: &str) -> String {
    let upper = site_name.to_uppercase();
    match upper.split_once(' ') {
        Some((first, rest)) => format!(
            r#"<span class="logo-mark">{}</span> {}"#,
            html_escape(first),
            html_escape(rest)
        ),
        None => format!(r#"<span class="logo-mark">{}</span>"#, html_escape(&upper)),
    }
}

pub fn render_footer(site_name: &str) -> String {
    let links: String = NavItem::ALL
        .iter()
        .map(|item| format!(r#"<a href="{}">{}</a>"#, item.href(), item.label()))
        .collect();

    format!(
        r#"<footer class="site-footer">
    <p>&copy; {} {}. Product data from the DummyJSON demo API.</p>
    <div class="footer-links">{}</div>
</footer>"#,
        chrono::Utc::now().year(),
        html_escape(site_name),
        links
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_marked() {
        let html = render_navbar("Vibe Check", Some(NavItem::Products));
        assert!(html.contains(r#"<a href="/products" class="nav-link active" aria-current="page">Products</a>"#));
        assert!(html.contains(r#"<a href="/about" class="nav-link">About</a>"#));
        assert!(html.contains(r#"<span class="logo-mark">VIBE</span> CHECK"#));
    }

    #[test]
    fn test_no_active_link() {
        let html = render_navbar("Vibe Check", None);
        assert!(!html.contains("active"));
    }

    #[test]
    fn test_shell_title() {
        let config = SiteConfig::default();
        let shell = page_shell(&config, "About", "About us", Some(NavItem::About));
        let opening = shell.render_opening();
        assert!(opening.contains("<title>About | Vibe Check</title>"));
        assert!(opening.contains(r#"class="nav-link active""#));
        assert!(shell.render_closing().contains("site-footer"));

        let shell = page_shell(&config, "Vibe Check", "Home", Some(NavItem::Home));
        assert!(shell.render_opening().contains("<title>Vibe Check</title>"));
    }
}
