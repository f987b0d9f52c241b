//! Procedure names.

use vibe_data::DependencyTag;

/// Namespace all product procedures live under.
pub const ROUTER_NAMESPACE: &str = "product";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    /// Read-only, called with GET.
    Query,
    /// Relays a write upstream, called with POST.
    Mutation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    List,
    GetById,
    GetByCategory,
    Search,
    Categories,
    CategoryList,
    AddProduct,
    UpdateProduct,
    DeleteProduct,
}

impl Procedure {
    pub const ALL: [Procedure; 9] = [
        Procedure::List,
        Procedure::GetById,
        Procedure::GetByCategory,
        Procedure::Search,
        Procedure::Categories,
        Procedure::CategoryList,
        Procedure::AddProduct,
        Procedure::UpdateProduct,
        Procedure::DeleteProduct,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::GetById => "getById",
            Self::GetByCategory => "getByCategory",
            Self::Search => "search",
            Self::Categories => "categories",
            Self::CategoryList => "categoryList",
            Self::AddProduct => "addProduct",
            Self::UpdateProduct => "updateProduct",
            Self::DeleteProduct => "deleteProduct",
        }
    }

    /// Full path such as `product.getById`.
    pub fn path(&self) -> String {
        format!("{}.{}", ROUTER_NAMESPACE, self.name())
    }

    /// Parse `product.<name>`.
    pub fn parse(path: &str) -> Option<Self> {
        let name = path.strip_prefix(ROUTER_NAMESPACE)?.strip_prefix('.')?;
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn kind(&self) -> ProcedureKind {
        match self {
            Self::AddProduct | Self::UpdateProduct | Self::DeleteProduct => ProcedureKind::Mutation,
            _ => ProcedureKind::Query,
        }
    }

    /// Tag for upstream calls made by this procedure.
    pub fn dependency_tag(&self) -> DependencyTag {
        match self {
            Self::List | Self::GetById | Self::GetByCategory => DependencyTag::Catalog,
            Self::Search => DependencyTag::Search,
            Self::Categories | Self::CategoryList => DependencyTag::Categories,
            Self::AddProduct | Self::UpdateProduct | Self::DeleteProduct => DependencyTag::Mutation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_name() {
        for procedure in Procedure::ALL {
            assert_eq!(Procedure::parse(&procedure.path()), Some(procedure));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Procedure::parse("product.explode"), None);
        assert_eq!(Procedure::parse("user.list"), None);
        assert_eq!(Procedure::parse("productlist"), None);
        assert_eq!(Procedure::parse("list"), None);
    }

    #[test]
    fn test_kinds_and_tags() {
        assert_eq!(Procedure::Search.kind(), ProcedureKind::Query);
        assert_eq!(Procedure::DeleteProduct.kind(), ProcedureKind::Mutation);
        assert_eq!(Procedure::CategoryList.dependency_tag(), DependencyTag::Categories);
        assert_eq!(Procedure::AddProduct.dependency_tag(), DependencyTag::Mutation);
    }
}
