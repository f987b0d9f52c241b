//! Path routing.

use vibe_rpc::RPC_PREFIX;

/// Navbar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Products,
    About,
    Contact,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [NavItem::Home, NavItem::Products, NavItem::About, NavItem::Contact];

    pub fn href(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Products => "/products",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Products => "Products",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

/// Where a request goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
    Products,
    /// `/products/{id}`. `None` when the id is not a number.
    Product(Option<u64>),
    /// `/api/rpc/{procedure}`, with the procedure path (possibly empty).
    Rpc(String),
    NotFound,
}

impl Route {
    /// Resolve a request path (no query string). A trailing `/` is ignored.
    pub fn resolve(path: &str) -> Self {
        if let Some(procedure) = path.strip_prefix(RPC_PREFIX) {
            return Route::Rpc(procedure.trim_end_matches('/').to_string());
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["products"] => Route::Products,
            ["products", id] => Route::Product(id.parse().ok()),
            _ => Route::NotFound,
        }
    }

    /// Navbar entry to highlight.
    pub fn nav(&self) -> Option<NavItem> {
        match self {
            Route::Home => Some(NavItem::Home),
            Route::About => Some(NavItem::About),
            Route::Contact => Some(NavItem::Contact),
            Route::Products => Some(NavItem::Products),
            Route::Product(_) | Route::Rpc(_) | Route::NotFound => None,
        }
    }

    pub fn is_rpc(&self) -> bool {
        matches!(self, Route::Rpc(_))
    }

    /// Short name for logs and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Contact => "contact",
            Route::Products => "products",
            Route::Product(_) => "product-detail",
            Route::Rpc(_) => "rpc",
            Route::NotFound => "not-found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/about/"), Route::About);
        assert_eq!(Route::resolve("/contact"), Route::Contact);
        assert_eq!(Route::resolve("/products"), Route::Products);
    }

    #[test]
    fn test_product_ids() {
        assert_eq!(Route::resolve("/products/12"), Route::Product(Some(12)));
        assert_eq!(Route::resolve("/products/abc"), Route::Product(None));
        assert_eq!(Route::resolve("/products/-1"), Route::Product(None));
        assert_eq!(Route::resolve("/products/1/reviews"), Route::NotFound);
    }

    #[test]
    fn test_rpc_and_unknown() {
        assert_eq!(
            Route::resolve("/api/rpc/product.list"),
            Route::Rpc("product.list".to_string())
        );
        assert_eq!(Route::resolve("/api/rpc/"), Route::Rpc(String::new()));
        assert_eq!(Route::resolve("/api/other"), Route::NotFound);
        assert_eq!(Route::resolve("/signup"), Route::NotFound);
    }

    #[test]
    fn test_nav() {
        assert_eq!(Route::Products.nav(), Some(NavItem::Products));
        assert_eq!(Route::Product(Some(1)).nav(), None);
        assert_eq!(NavItem::About.href(), "/about");
    }
}
