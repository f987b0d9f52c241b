//! Site stylesheet, inlined into every page head.

pub const SITE_STYLES: &str = r##"
:root {
    --primary: #facc15;
    --accent: #3b82f6;
    --bg: #fffdf5;
    --card-bg: #ffffff;
    --text: #111111;
    --text-muted: #4b5563;
    --border: #000000;
    --success-bg: #bbf7d0;
    --success: #14532d;
    --warning-bg: #fef08a;
    --warning: #713f12;
    --error-bg: #fecaca;
    --error: #7f1d1d;
    --shadow: 4px 4px 0 0 #000;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

a { color: inherit; }

/* Navbar */
.navbar {
    position: sticky;
    top: 0;
    z-index: 50;
    display: flex;
    justify-content: space-between;
    align-items: center;
    flex-wrap: wrap;
    gap: 1rem;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 2px solid var(--border);
    box-shadow: 0 4px 0 0 #000;
}

.logo {
    font-size: 1.5rem;
    font-weight: 800;
    text-decoration: none;
}

.logo-mark {
    background: var(--primary);
    padding: 0.25rem 0.5rem;
    border: 2px solid var(--border);
}

.nav-links { display: flex; gap: 1.5rem; }

.nav-link {
    font-weight: 700;
    text-decoration: none;
    border-bottom: 2px solid transparent;
}

.nav-link.active { border-bottom-color: var(--primary); }
.nav-link:hover { color: var(--accent); }

main {
    flex: 1;
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 2rem 1rem;
}

/* Footer */
.site-footer {
    border-top: 2px solid var(--border);
    background: var(--card-bg);
    padding: 1.5rem 2rem;
    display: flex;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 1rem;
    font-size: 0.875rem;
}

.footer-links { display: flex; gap: 1rem; }

/* Shared */
.card {
    background: var(--card-bg);
    border: 2px solid var(--border);
    box-shadow: var(--shadow);
    padding: 1.5rem;
}

.btn {
    display: inline-block;
    padding: 0.6rem 1.25rem;
    border: 2px solid var(--border);
    background: var(--primary);
    font-weight: 700;
    text-decoration: none;
    cursor: pointer;
    box-shadow: 3px 3px 0 0 #000;
}

.btn:hover { box-shadow: 1px 1px 0 0 #000; transform: translate(2px, 2px); }
.btn-outline { background: var(--card-bg); }
.btn:disabled, .btn.disabled { background: #d1d5db; color: #4b5563; cursor: not-allowed; box-shadow: none; transform: none; }

.badge {
    display: inline-block;
    padding: 0.125rem 0.5rem;
    border: 2px solid var(--border);
    font-size: 0.8125rem;
    font-weight: 600;
    text-decoration: none;
    background: var(--card-bg);
}

.stars { color: #f59e0b; letter-spacing: 0.05em; }
.star.empty { color: #d1d5db; }

.stock-in { background: var(--success-bg); color: var(--success); }
.stock-low { background: var(--warning-bg); color: var(--warning); }
.stock-out { background: var(--error-bg); color: var(--error); }

.muted { color: var(--text-muted); }

/* Home */
.hero { text-align: center; max-width: 42rem; margin: 2rem auto 3rem; }
.hero h1 { font-size: 2.75rem; font-weight: 800; margin-bottom: 1rem; }
.hero p { font-size: 1.125rem; color: var(--text-muted); margin-bottom: 2rem; }
.hero-actions { display: flex; justify-content: center; gap: 1rem; }

.feature-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 2rem;
}

.feature-card h2 { font-size: 1.25rem; margin-bottom: 0.75rem; }
.feature-card a { display: inline-block; margin-top: 1rem; color: var(--accent); font-weight: 600; text-decoration: none; }

/* About / Contact */
.page-title { font-size: 2.25rem; font-weight: 800; margin-bottom: 1.5rem; }
.prose-card { margin-bottom: 2rem; }
.prose-card h2 { font-size: 1.25rem; margin-bottom: 1rem; }
.prose-card p + p { margin-top: 1rem; }
.two-col { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; margin-bottom: 2rem; }

.contact-hero { margin-bottom: 3rem; }
.contact-hero h1 { font-size: 3rem; font-weight: 800; margin-bottom: 1rem; }
.contact-hero .highlight { background: var(--primary); padding: 0 0.75rem; border: 3px solid var(--border); }
.contact-grid { display: grid; grid-template-columns: 2fr 3fr; gap: 2.5rem; margin-bottom: 3rem; }
.contact-info .card { margin-bottom: 2rem; }
.contact-info h2, .contact-form h2 { font-size: 1.5rem; margin-bottom: 1rem; }
.social-links { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
.social-links a { border: 2px solid var(--border); padding: 0.6rem; text-decoration: none; font-weight: 600; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.form-field { margin-bottom: 1rem; }
.form-field label { display: block; font-weight: 700; margin-bottom: 0.25rem; }
.form-field input, .form-field select, .form-field textarea {
    width: 100%;
    padding: 0.6rem;
    border: 2px solid var(--border);
    font: inherit;
    background: var(--card-bg);
}
.form-actions { display: flex; gap: 1rem; }
.form-success { background: var(--accent); color: white; border: 2px solid var(--border); padding: 1.5rem; }
.faq-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-top: 1.5rem; }
.faq-grid h3 { margin-bottom: 0.75rem; }
.section-heading { display: inline-block; background: var(--primary); border: 2px solid var(--border); padding: 0.25rem 1rem; box-shadow: var(--shadow); }
.map-placeholder { margin-top: 3rem; text-align: center; padding: 4rem 2rem; background: #e5e7eb; }

/* Products */
.products-header h1 { font-size: 2rem; font-weight: 800; margin-bottom: 0.5rem; }
.products-header p { color: var(--text-muted); margin-bottom: 1.5rem; }

.category-bar { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
.category-bar a { text-transform: capitalize; }
.category-bar a.active { background: var(--primary); }

.filter-form {
    display: flex;
    flex-wrap: wrap;
    align-items: flex-end;
    gap: 1rem;
    margin-bottom: 2rem;
}

.filter-form label { display: block; font-size: 0.8125rem; font-weight: 700; }
.filter-form input, .filter-form select { padding: 0.5rem; border: 2px solid var(--border); background: var(--card-bg); font: inherit; }

.error-banner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    padding: 0.75rem 1rem;
    margin-bottom: 1.5rem;
    background: var(--error-bg);
    color: var(--error);
    border: 2px solid var(--error);
}

.error-banner a { background: #fee2e2; padding: 0.25rem 0.75rem; text-decoration: none; font-weight: 600; }

.empty-state { text-align: center; padding: 2.5rem; }
.empty-state p { font-size: 1.125rem; color: var(--text-muted); margin-bottom: 1rem; }

.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1.5rem;
}

.product-card {
    background: var(--card-bg);
    border: 2px solid var(--border);
    box-shadow: var(--shadow);
    overflow: hidden;
    display: flex;
    flex-direction: column;
}

.product-card-image { position: relative; display: block; height: 12rem; background: #f3f4f6; }
.product-card-image img { width: 100%; height: 100%; object-fit: cover; }
.discount-badge { position: absolute; top: 0.5rem; right: 0.5rem; background: #22c55e; color: white; font-size: 0.75rem; font-weight: 700; padding: 0.125rem 0.5rem; }
.product-card-body { padding: 1rem; display: flex; flex-direction: column; gap: 0.5rem; flex: 1; }
.product-card-title { display: flex; justify-content: space-between; gap: 0.5rem; }
.product-card-title h2 { font-size: 1.0625rem; }
.product-card-title a { text-decoration: none; }
.price { font-weight: 700; color: var(--accent); text-align: right; }
.price-original { font-size: 0.75rem; color: var(--text-muted); text-decoration: line-through; }
.product-card-description { color: var(--text-muted); font-size: 0.875rem; overflow: hidden; display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; }
.product-card-meta { display: flex; justify-content: space-between; align-items: center; margin-top: auto; font-size: 0.875rem; }
.product-card-meta .details-link { color: var(--accent); font-weight: 600; text-decoration: none; }

.pagination { display: flex; justify-content: center; gap: 0.25rem; margin-top: 2rem; }
.pagination a, .pagination span { min-width: 2.25rem; text-align: center; padding: 0.25rem 0.75rem; border: 2px solid var(--border); text-decoration: none; background: var(--card-bg); }
.pagination .current { background: var(--accent); color: white; }
.pagination .disabled { color: #9ca3af; border-color: #9ca3af; }

.stats { margin-top: 1rem; text-align: center; font-size: 0.875rem; color: var(--text-muted); }

/* Product detail */
.back-link { margin-bottom: 1.5rem; }
.product-detail { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; padding: 0; margin-bottom: 1.5rem; }

.gallery { padding: 1rem; }
.gallery-main { border: 2px solid var(--border); background: #f9fafb; aspect-ratio: 1; display: flex; align-items: center; justify-content: center; }
.gallery-main img { max-width: 100%; max-height: 100%; object-fit: contain; }
.gallery-thumbs { display: flex; gap: 0.5rem; margin-top: 0.75rem; overflow-x: auto; }
.gallery-thumbs a { border: 2px solid #d1d5db; width: 4rem; height: 4rem; flex-shrink: 0; }
.gallery-thumbs a.active { border-color: var(--border); box-shadow: 2px 2px 0 0 #000; }
.gallery-thumbs img { width: 100%; height: 100%; object-fit: cover; }

.product-info { padding: 1rem; display: flex; flex-direction: column; gap: 1rem; }
.product-info h1 { font-size: 1.875rem; font-weight: 900; line-height: 1.2; }
.info-badges { display: flex; gap: 0.5rem; align-items: center; }
.category-badge { background: var(--accent); color: white; }
.price-box { border: 2px solid var(--border); padding: 0.75rem; background: #f9fafb; }
.price-box .price-current { font-size: 1.5rem; font-weight: 900; }
.price-box .price-original { font-size: 1.125rem; }
.stock-row { display: flex; gap: 0.5rem; margin-top: 0.5rem; }
.info-heading { font-size: 1.125rem; font-weight: 700; border-bottom: 2px solid var(--primary); display: inline-block; margin-bottom: 0.25rem; }
.tag-list { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.savings-callout { display: flex; align-items: center; gap: 0.75rem; border: 2px solid var(--border); background: #fef9c3; padding: 0.75rem; }
.savings-callout strong { background: var(--primary); border: 2px solid var(--border); padding: 0.25rem 0.5rem; }
.product-actions { display: flex; gap: 0.75rem; margin-top: auto; }

.tabs { margin-bottom: 1.5rem; padding: 0; }
.tabs > input { position: absolute; opacity: 0; pointer-events: none; }
.tab-labels { display: grid; grid-template-columns: repeat(3, 1fr); border-bottom: 2px solid var(--border); }
.tab-labels label { padding: 0.6rem; text-align: center; font-weight: 700; cursor: pointer; border-right: 2px solid var(--border); }
.tab-labels label:last-child { border-right: none; }
.tab-panel { display: none; padding: 1rem; }
#tab-details:checked ~ .tab-labels label[for="tab-details"],
#tab-specs:checked ~ .tab-labels label[for="tab-specs"],
#tab-reviews:checked ~ .tab-labels label[for="tab-reviews"] { background: var(--primary); }
#tab-details:checked ~ .panel-details,
#tab-specs:checked ~ .panel-specs,
#tab-reviews:checked ~ .panel-reviews { display: block; }
.detail-block { border: 2px solid var(--border); margin-bottom: 0.75rem; }
.detail-block h3 { background: #f9fafb; padding: 0.5rem 0.75rem; font-size: 1rem; border-bottom: 2px solid var(--border); }
.detail-block p { padding: 0.75rem; }
.spec-table { width: 100%; border-collapse: collapse; border: 2px solid var(--border); }
.spec-table th, .spec-table td { text-align: left; padding: 0.5rem 0.75rem; border-bottom: 2px solid var(--border); }
.review-summary { display: flex; gap: 0.75rem; align-items: center; padding: 0.75rem; background: #f9fafb; border: 2px solid var(--border); }
.review-summary .average { font-size: 1.25rem; font-weight: 900; }
.review { padding: 0.75rem 0; border-bottom: 2px solid var(--border); }
.review-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.25rem; }
.review-date { background: var(--primary); border: 2px solid var(--border); padding: 0 0.5rem; font-size: 0.75rem; }
.no-reviews { text-align: center; padding: 1.5rem; }

.related { background: #dbeafe; }
.related h2 { font-size: 1.25rem; border-bottom: 2px solid var(--border); padding-bottom: 0.5rem; margin-bottom: 1rem; }
.related-empty { text-align: center; padding: 2rem; font-weight: 700; }

.not-found { text-align: center; padding: 2.5rem; }
.not-found h1 { font-size: 1.75rem; margin-bottom: 1rem; }
.not-found p { color: var(--text-muted); margin-bottom: 1.5rem; }

@media (max-width: 768px) {
    .contact-grid, .product-detail, .faq-grid, .form-row { grid-template-columns: 1fr; }
    .hero h1 { font-size: 2rem; }
    .navbar { justify-content: center; }
}
"##;
