//! Storefront query state.

use crate::catalog::{CategoryFilter, Product};
use serde::{Deserialize, Serialize};

/// The shopper's current search text and category chip.
///
/// Both default to "match everything": an empty search is a substring of any
/// title, and the default category is the sentinel.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Search text typed in the header.
    pub search: String,
    /// Active category chip.
    pub category: CategoryFilter,
}

impl CatalogQuery {
    /// Create a query that matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the active category from a chip label.
    pub fn with_category(mut self, label: impl Into<String>) -> Self {
        self.category = CategoryFilter::from_label(label);
        self
    }

    /// Check if a product passes the search text and the category chip.
    pub fn matches(&self, product: &Product) -> bool {
        product.title_contains(&self.search) && self.category.matches(product)
    }
}
