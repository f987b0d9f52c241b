//! Contact page. The message form is handled in the browser only.

use std::fmt::Display;

use futures::Sink;
use vibe_core::{html_escape, SiteConfig, WorkloadError};

use crate::routes::NavItem;
use crate::sections::page_shell;
use crate::writer::PageWriter;

pub const SUBJECTS: [&str; 5] = [
    "General Inquiry",
    "Product Support",
    "Partnership Opportunity",
    "Feature Request",
    "Bug Report",
];

const FAQ: [(&str, &str); 4] = [
    (
        "How do I report a technical issue?",
        "For technical issues, you can contact our support team at support@vibecheck.com or use the form above to send us a detailed description of the problem you're experiencing.",
    ),
    (
        "Do you offer business partnerships?",
        "Yes! We're always looking to partner with companies that share our vision. Please reach out to our business development team at partnerships@vibecheck.com.",
    ),
    (
        "What's your typical response time?",
        "We aim to respond to all inquiries within 24-48 business hours. For urgent matters, please call our customer service line directly.",
    ),
    (
        "Can I request a product to be added?",
        "Absolutely! We're constantly expanding our product database. Use our contact form and select \"Feature Request\" to let us know what products you'd like to see.",
    ),
];

const SOCIAL: [&str; 4] = ["Twitter", "Facebook", "Instagram", "LinkedIn"];

/// Confirmation stays up this long before the form comes back.
const CONFIRMATION_MS: u32 = 5000;

pub async fn render<S, E>(config: &SiteConfig, out: &mut PageWriter<'_, S, E>) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = page_shell(
        config,
        "Contact",
        "Get in touch with questions, partnership ideas or feedback.",
        Some(NavItem::Contact),
    );
    out.open(&shell).await?;
    out.section("contact-hero", &render_contact_hero()).await?;
    out.section("contact", &render_contact_grid(&config.site.name)).await?;
    out.section("faq", &render_faq()).await?;
    out.section("map", &render_map_placeholder()).await?;
    out.close(&shell).await
}

pub fn render_contact_hero() -> String {
    r#"<section class="contact-hero" data-section="contact-hero">
    <h1>Get in <span class="highlight">Touch</span></h1>
    <p>Have questions about our product comparison platform? Want to partner with us? We'd love to hear from you!</p>
</section>"#
        .to_string()
}

pub fn render_contact_grid(site_name: &str) -> String {
    let social: String = SOCIAL
        .iter()
        .map(|name| format!(r##"<a href="#">{}</a>"##, name))
        .collect();

    format!(
        r#"<section class="contact-grid" data-section="contact">
    <div class="contact-info">
        <div class="card">
            <h2>Visit Us</h2>
            <p><strong>{site} HQ</strong></p>
            <p>123 Comparison Ave</p>
            <p>San Francisco, CA 94105</p>
            <p class="muted"><strong>Monday-Friday:</strong> 9:00 AM - 6:00 PM PT</p>
            <p class="muted"><strong>Saturday-Sunday:</strong> Closed</p>
        </div>
        <div class="card">
            <h2>Contact Methods</h2>
            <p><strong>Email Us</strong></p>
            <p class="muted">General Inquiries: <a href="mailto:hello@vibecheck.com">hello@vibecheck.com</a></p>
            <p class="muted">Support: <a href="mailto:support@vibecheck.com">support@vibecheck.com</a></p>
            <p><strong>Call Us</strong></p>
            <p class="muted">Customer Service: <a href="tel:18005551234">1-800-555-1234</a></p>
            <p class="muted">Business Development: <a href="tel:18005551235">1-800-555-1235</a></p>
        </div>
        <div class="card">
            <h2>Follow Us</h2>
            <div class="social-links">{social}</div>
        </div>
    </div>
    {form}
</section>"#,
        site = html_escape(site_name),
        social = social,
        form = render_contact_form(),
    )
}

pub fn render_contact_form() -> String {
    let options: String = SUBJECTS
        .iter()
        .map(|s| format!(r#"<option value="{s}">{s}</option>"#, s = s))
        .collect();

    format!(
        r#"<div class="card contact-form">
        <h2>Send Us a Message</h2>
        <div class="form-success" id="contact-success" hidden>
            <h3>Message Sent!</h3>
            <p>Thanks for reaching out. We'll get back to you as soon as possible.</p>
        </div>
        <form id="contact-form">
            <div class="form-row">
                <div class="form-field"><label for="name">Name</label><input type="text" id="name" name="name" required></div>
                <div class="form-field"><label for="email">Email</label><input type="email" id="email" name="email" required></div>
            </div>
            <div class="form-field">
                <label for="subject">Subject</label>
                <select id="subject" name="subject" required><option value="">Select a subject</option>{options}</select>
            </div>
            <div class="form-field">
                <label for="message">Message</label>
                <textarea id="message" name="message" rows="5" required></textarea>
            </div>
            <div class="form-actions">
                <button type="submit" class="btn">Send Message</button>
                <button type="reset" class="btn btn-outline">Reset Form</button>
            </div>
        </form>
        <script>
        (function () {{
            var form = document.getElementById('contact-form');
            var done = document.getElementById('contact-success');
            form.addEventListener('submit', function (e) {{
                e.preventDefault();
                form.reset();
                form.hidden = true;
                done.hidden = false;
                setTimeout(function () {{ done.hidden = true; form.hidden = false; }}, {ms});
            }});
        }})();
        </script>
    </div>"#,
        options = options,
        ms = CONFIRMATION_MS,
    )
}

pub fn render_faq() -> String {
    let items: String = FAQ
        .iter()
        .map(|(q, a)| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#,
                html_escape(q),
                html_escape(a)
            )
        })
        .collect();
    format!(
        r#"<section data-section="faq">
    <h2 class="section-heading">Frequently Asked Questions</h2>
    <div class="faq-grid">{}</div>
</section>"#,
        items
    )
}

pub fn render_map_placeholder() -> String {
    r#"<section class="card map-placeholder" data-section="map">
    <h2>Interactive Map Coming Soon</h2>
    <p class="muted">123 Comparison Ave, San Francisco, CA 94105</p>
</section>"#
        .to_string()
}
