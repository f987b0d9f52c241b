//! Product image gallery.

use vibe_catalog::SafeProduct;
use vibe_core::html_escape;

/// Main image plus a thumbnail strip.
///
/// Thumbnails link back to the same page with `?image=N`; `selected` is
/// clamped to the images that exist.
pub fn render_gallery(product: &SafeProduct, selected: usize) -> String {
    let (active, main_url) = product.image_at(selected);
    let title = html_escape(&product.title);

    let thumbs = if product.images.len() > 1 {
        let links: String = product
            .images
            .iter()
            .enumerate()
            .map(|(i, url)| {
                format!(
                    r#"<a href="/products/{id}?image={i}"{class} aria-label="Show image {n}"><img src="{url}" alt="{title} thumbnail {n}" loading="lazy"></a>"#,
                    id = product.id,
                    i = i,
                    n = i + 1,
                    class = if i == active { r#" class="active""# } else { "" },
                    url = html_escape(url),
                    title = title,
                )
            })
            .collect();
        format!(r#"<div class="gallery-thumbs">{}</div>"#, links)
    } else {
        String::new()
    };

    format!(
        r#"<div class="card gallery">
    <div class="gallery-main"><img src="{}" alt="{}"></div>
    {}
</div>"#,
        html_escape(main_url),
        title,
        thumbs
    )
}
