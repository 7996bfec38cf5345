//! Catalog filtering for the browse section.

use serde::{Deserialize, Serialize};

use crate::models::catalog::CatalogItem;

/// Filter value that matches every category.
pub const ALL_CATEGORIES: &str = "All Categories";

/// A browse query: free-text term plus category filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    /// A category display name, or [`ALL_CATEGORIES`].
    pub category: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(term: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            category: category.into(),
        }
    }

    /// Whether `item` is visible under this query.
    ///
    /// The name must contain the term, ignoring case, and the category must
    /// equal the filter exactly unless the filter is [`ALL_CATEGORIES`].
    #[must_use]
    pub fn matches(&self, item: &CatalogItem) -> bool {
        let name_matches = item
            .name
            .to_lowercase()
            .contains(&self.term.to_lowercase());
        let category_matches =
            self.category == ALL_CATEGORIES || item.category.as_str() == self.category;
        name_matches && category_matches
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new("", ALL_CATEGORIES)
    }
}

/// The items visible under `query`, in catalog order.
#[must_use]
pub fn filter_catalog(items: &[CatalogItem], query: &SearchQuery) -> Vec<CatalogItem> {
    items
        .iter()
        .filter(|item| query.matches(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::CatalogProvider;
    use crate::providers::mock::MockCatalog;

    fn names(query: &SearchQuery) -> Vec<String> {
        filter_catalog(&MockCatalog.items(), query)
            .into_iter()
            .map(|item| item.name)
            .collect()
    }

    #[test]
    fn test_term_is_case_insensitive() {
        assert_eq!(
            names(&SearchQuery::new("honda", ALL_CATEGORIES)),
            ["Honda City"]
        );
        assert_eq!(names(&SearchQuery::new("CITY", ALL_CATEGORIES)), ["Honda City"]);
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(names(&SearchQuery::new("", "Bikes")), ["Royal Enfield"]);
        assert_eq!(
            names(&SearchQuery::new("", "Gadgets")),
            ["MacBook Pro", "Canon DSLR"]
        );
    }

    #[test]
    fn test_category_filter_is_exact() {
        assert!(names(&SearchQuery::new("", "bikes")).is_empty());
    }

    #[test]
    fn test_default_query_shows_everything() {
        assert_eq!(names(&SearchQuery::default()).len(), 6);
    }

    #[test]
    fn test_term_and_category_combine() {
        assert!(names(&SearchQuery::new("honda", "Bikes")).is_empty());
        assert_eq!(names(&SearchQuery::new("a", "Homes")), ["Apartment"]);
    }
}
