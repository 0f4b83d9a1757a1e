//! Dashboard statistics.

use crate::catalog::Product;
use serde::Serialize;

/// Label used when there is no last product.
pub const NO_PRODUCT_LABEL: &str = "Nenhum produto";

/// Summary cards shown above the admin product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Every product in the list.
    pub active: usize,
    /// Every product flagged featured, not only the storefront hero.
    pub featured: usize,
    /// Title of the last product in list order.
    pub last_title: Option<String>,
}

impl DashboardStats {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            active: products.len(),
            featured: products.iter().filter(|p| p.featured).count(),
            last_title: products.last().map(|p| p.display_title.clone()),
        }
    }

    /// The "recently added" card text.
    pub fn last_product_label(&self) -> &str {
        self.last_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(NO_PRODUCT_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductDraft;

    #[test]
    fn test_stats_counts() {
        let products = vec![
            Product::unsaved(ProductDraft::new("a").with_featured(true)),
            Product::unsaved(ProductDraft::new("b").with_featured(true)),
            Product::unsaved(ProductDraft::new("c")),
        ];
        let stats = DashboardStats::from_products(&products);

        assert_eq!(stats.active, 3);
        assert_eq!(stats.featured, 2);
        assert_eq!(stats.last_product_label(), "c");
    }

    #[test]
    fn test_stats_empty_list() {
        let stats = DashboardStats::from_products(&[]);
        assert_eq!(stats.active, 0);
        assert_eq!(stats.featured, 0);
        assert_eq!(stats.last_title, None);
        assert_eq!(stats.last_product_label(), "Nenhum produto");
    }
}
