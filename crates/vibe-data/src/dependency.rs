//! Dependency tagging for upstream calls.

use crate::RetryPolicy;

/// What an upstream call is for.
///
/// Each tag carries its default retry behaviour and shows up in logs and
/// request metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyTag {
    /// Product listings and single products.
    Catalog,
    /// Free-text search.
    Search,
    /// Category listings.
    Categories,
    /// Add, update and delete. Never retried.
    Mutation,
}

impl DependencyTag {
    /// Retry policy for this tag, given the configured query retry count.
    pub fn retry_policy(&self, query_retries: u32) -> RetryPolicy {
        match self {
            Self::Mutation => RetryPolicy::none(),
            _ => RetryPolicy::new(query_retries),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Search => "search",
            Self::Categories => "categories",
            Self::Mutation => "mutation",
        }
    }
}

impl std::fmt::Display for DependencyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutations_never_retry() {
        assert_eq!(DependencyTag::Mutation.retry_policy(3).max_retries, 0);
        assert_eq!(DependencyTag::Catalog.retry_policy(2).max_retries, 2);
    }

    #[test]
    fn test_names() {
        assert_eq!(DependencyTag::Search.to_string(), "search");
        assert_eq!(DependencyTag::Categories.name(), "categories");
    }
}
