//! Landing page.

use std::fmt::Display;

use futures::Sink;
use vibe_core::{html_escape, SiteConfig, WorkloadError};

use crate::routes::NavItem;
use crate::sections::page_shell;
use crate::writer::PageWriter;

struct Feature {
    title: &'static str,
    text: &'static str,
    link: &'static str,
    href: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Latest Products",
        text: "Discover our newest additions to the store.",
        link: "View Latest",
        href: "/products",
    },
    Feature {
        title: "Popular Categories",
        text: "Browse through our most popular product categories.",
        link: "Explore Categories",
        href: "/products",
    },
    Feature {
        title: "Special Deals",
        text: "Check out our limited-time offers and promotions.",
        link: "See Deals",
        href: "/products?sortBy=discountPercentage&order=desc",
    },
];

pub async fn render<S, E>(config: &SiteConfig, out: &mut PageWriter<'_, S, E>) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = page_shell(
        config,
        &config.site.name,
        "Discover and explore a curated collection of products from various categories.",
        Some(NavItem::Home),
    );
    out.open(&shell).await?;
    out.section("hero", &render_hero(&config.site.name)).await?;
    out.section("features", &render_features()).await?;
    out.close(&shell).await
}

pub fn render_hero(site_name: &str) -> String {
    format!(
        r#"<section class="hero" data-section="hero">
    <h1>Welcome to {}</h1>
    <p>Discover and explore our curated collection of premium products from various categories.</p>
    <div class="hero-actions">
        <a href="/products" class="btn">Browse Products</a>
        <a href="/about" class="btn btn-outline">Learn More</a>
    </div>
</section>"#,
        html_escape(site_name)
    )
}

pub fn render_features() -> String {
    let cards: String = FEATURES
        .iter()
        .map(|f| {
            format!(
                r#"<div class="card feature-card"><h2>{}</h2><p class="muted">{}</p><a href="{}">{} &rarr;</a></div>"#,
                f.title,
                f.text,
                html_escape(f.href),
                f.link
            )
        })
        .collect();
    format!(
        r#"<section class="feature-grid" data-section="features">{}</section>"#,
        cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_calls_to_action() {
        let html = render_hero("Vibe Check");
        assert!(html.contains("Welcome to Vibe Check"));
        assert!(html.contains(r#"<a href="/products" class="btn">Browse Products</a>"#));
        assert!(html.contains(r#"<a href="/about" class="btn btn-outline">Learn More</a>"#));
    }

    #[test]
    fn test_three_feature_cards() {
        let html = render_features();
        assert_eq!(html.matches("feature-card").count(), 3);
        assert!(html.contains("View Latest &rarr;"));
        assert!(html.contains("Explore Categories &rarr;"));
        assert!(html.contains("See Deals &rarr;"));
    }
}
