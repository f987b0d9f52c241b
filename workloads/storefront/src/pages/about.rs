//! About page.

use std::fmt::Display;

use futures::Sink;
use vibe_core::{html_escape, SiteConfig, WorkloadError};

use crate::routes::NavItem;
use crate::sections::page_shell;
use crate::writer::PageWriter;

pub async fn render<S, E>(config: &SiteConfig, out: &mut PageWriter<'_, S, E>) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = page_shell(
        config,
        "About",
        "Who we are and how the catalog is built.",
        Some(NavItem::About),
    );
    out.open(&shell).await?;
    out.section("about", &render_about(&config.site.name)).await?;
    out.section("about-contact", &render_contact_card(&config.site.contact_email))
        .await?;
    out.close(&shell).await
}

pub fn render_about(site_name: &str) -> String {
    format!(
        r#"<section data-section="about">
    <h1 class="page-title">About {name}</h1>
    <div class="card prose-card">
        <h2>Our Mission</h2>
        <p>We strive to provide a comprehensive collection of the best products available online. {name} aggregates products from various sources to help you make informed decisions and find exactly what you're looking for.</p>
        <p>Whether you're looking for electronics, home furniture, kitchen appliances, or decorative items, everything is brought together in one convenient place.</p>
    </div>
    <div class="two-col">
        <div class="card prose-card">
            <h2>Our Team</h2>
            <p>Our dedicated team works tirelessly to curate the best products and keep the browsing experience fast and friendly. With backgrounds in e-commerce, technology, and customer service, we're committed to helping you find what you need.</p>
        </div>
        <div class="card prose-card">
            <h2>Our Technology</h2>
            <p>Pages are rendered on the edge by a Rust WebAssembly component and streamed to your browser section by section. Product data comes from a typed API layer over the DummyJSON catalog.</p>
        </div>
    </div>
</section>"#,
        name = html_escape(site_name)
    )
}

pub fn render_contact_card(email: &str) -> String {
    let email = html_escape(email);
    format!(
        r#"<section class="card prose-card" data-section="about-contact">
    <h2>Contact Us</h2>
    <p>Have questions or suggestions? We'd love to hear from you! Reach out to our team at:</p>
    <p><a href="mailto:{email}">{email}</a></p>
</section>"#,
        email = email
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_headings() {
        let html = render_about("Vibe Check");
        for heading in ["Our Mission", "Our Team", "Our Technology"] {
            assert!(html.contains(&format!("<h2>{}</h2>", heading)));
        }
        assert!(html.contains("About Vibe Check"));
    }

    #[test]
    fn test_contact_email() {
        let html = render_contact_card("hello@vibecheck.com");
        assert!(html.contains(r#"<a href="mailto:hello@vibecheck.com">hello@vibecheck.com</a>"#));
    }
}
