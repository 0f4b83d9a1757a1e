//! Category labels for the storefront chips.
//!
//! Categories are free-text labels on products, not entities of their own.
//! The set shown to shoppers is derived from whatever the list contains.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sentinel label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "Todos";

/// The active category selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// The sentinel: every category passes.
    #[default]
    All,
    /// Only products whose category equals this label exactly.
    Named(String),
}

impl CategoryFilter {
    /// Map a chip label to a filter. The sentinel label selects [`CategoryFilter::All`].
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label)
        }
    }

    /// The chip label for this selection.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Check if a product passes this selection.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }
}

/// The sentinel followed by each distinct category in first-occurrence order.
pub fn category_labels(products: &[Product]) -> Vec<&str> {
    let mut labels = vec![ALL_CATEGORIES];
    for product in products {
        let category = product.category.as_str();
        if !labels[1..].contains(&category) {
            labels.push(category);
        }
    }
    labels
}
