//! Catalog derivation: from a product list and a query to what the
//! storefront renders.

use crate::catalog::{category_labels, Product};
use crate::storefront::CatalogQuery;

/// Grid heading when no category chip is selected.
pub const DEFAULT_HEADING: &str = "Nossas Escolhas";

/// Everything the storefront renders for one product list and one query.
///
/// Borrowed from the product list; derive again after the list or the query
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    /// `"Todos"` followed by each distinct category, first-occurrence order.
    pub categories: Vec<&'a str>,
    /// The hero product: the first with `featured == true`.
    pub featured: Option<&'a Product>,
    /// Products shown in the grid, input order preserved.
    pub products: Vec<&'a Product>,
    heading: &'a str,
}

impl<'a> CatalogView<'a> {
    /// Derive the view.
    ///
    /// The featured pick is excluded from the grid by position, so other
    /// products flagged as featured stay eligible. The query filters never
    /// touch the hero or the category chips.
    pub fn derive(products: &'a [Product], query: &'a CatalogQuery) -> Self {
        let featured_index = products.iter().position(|p| p.featured);

        let grid = products
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != featured_index)
            .map(|(_, product)| product)
            .filter(|product| query.matches(product))
            .collect();

        let heading = if query.category.is_all() {
            DEFAULT_HEADING
        } else {
            query.category.label()
        };

        Self {
            categories: category_labels(products),
            featured: featured_index.map(|index| &products[index]),
            products: grid,
            heading,
        }
    }

    /// Grid heading: the default title, or the active category label.
    pub fn heading(&self) -> &str {
        self.heading
    }

    /// Check if the grid is empty after filtering.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductDraft;
    use crate::ids::ProductId;

    fn product(id: i64, title: &str, category: &str, featured: bool) -> Product {
        Product::new(
            ProductId::new(id),
            ProductDraft::new(title)
                .with_category(category)
                .with_featured(featured),
        )
    }

    fn titles<'a>(view: &CatalogView<'a>) -> Vec<&'a str> {
        view.products.iter().map(|p| p.display_title.as_str()).collect()
    }

    #[test]
    fn test_single_featured_is_hero_and_excluded() {
        let products = vec![
            product(1, "Mouse", "Tech", false),
            product(2, "Teclado", "Tech", true),
            product(3, "Cadeira", "Casa", false),
        ];
        let query = CatalogQuery::new();
        let view = CatalogView::derive(&products, &query);

        assert_eq!(view.featured.map(|p| p.id), Some(Some(ProductId::new(2))));
        assert_eq!(titles(&view), vec!["Mouse", "Cadeira"]);
    }

    #[test]
    fn test_no_featured_keeps_full_list() {
        let products = vec![product(1, "Mouse", "Tech", false), product(2, "Mesa", "Casa", false)];
        let query = CatalogQuery::new();
        let view = CatalogView::derive(&products, &query);

        assert!(view.featured.is_none());
        assert_eq!(titles(&view), vec!["Mouse", "Mesa"]);
    }

    #[test]
    fn test_multiple_featured_only_first_is_excluded() {
        let products = vec![
            product(1, "Primeiro", "A", true),
            product(2, "Segundo", "A", true),
            product(3, "Terceiro", "A", false),
        ];
        let query = CatalogQuery::new();
        let view = CatalogView::derive(&products, &query);

        assert_eq!(view.featured.unwrap().display_title, "Primeiro");
        assert_eq!(titles(&view), vec!["Segundo", "Terceiro"]);
    }

    #[test]
    fn test_featured_excluded_even_when_ids_repeat() {
        let products = vec![product(1, "Hero", "A", true), product(1, "Outro", "A", false)];
        let query = CatalogQuery::new();
        let view = CatalogView::derive(&products, &query);

        assert_eq!(titles(&view), vec!["Outro"]);
    }

    #[test]
    fn test_categories_ignore_query() {
        let products = vec![
            product(1, "a", "A", false),
            product(2, "b", "B", true),
            product(3, "c", "A", false),
        ];
        let query = CatalogQuery::new().with_search("zzz").with_category("A");
        let view = CatalogView::derive(&products, &query);

        assert_eq!(view.categories, vec!["Todos", "A", "B"]);
        assert!(view.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = vec![product(1, "Wireless Mouse", "Tech", false), product(2, "Mousepad", "Tech", false)];

        let query = CatalogQuery::new().with_search("mouse");
        assert_eq!(titles(&CatalogView::derive(&products, &query)), vec!["Wireless Mouse", "Mousepad"]);

        let query = CatalogQuery::new().with_search("WIRE");
        assert_eq!(titles(&CatalogView::derive(&products, &query)), vec!["Wireless Mouse"]);
    }

    #[test]
    fn test_combined_filters() {
        let products = vec![product(1, "box", "B", false), product(2, "bat", "A", false)];
        let query = CatalogQuery::new().with_search("x").with_category("B");
        let view = CatalogView::derive(&products, &query);

        assert_eq!(titles(&view), vec!["box"]);
    }

    #[test]
    fn test_hero_unaffected_by_filters() {
        let products = vec![product(1, "Hero", "A", true), product(2, "box", "B", false)];
        let query = CatalogQuery::new().with_category("B");
        let view = CatalogView::derive(&products, &query);

        assert_eq!(view.featured.unwrap().display_title, "Hero");
        assert_eq!(titles(&view), vec!["box"]);
    }

    #[test]
    fn test_empty_list() {
        let products: Vec<Product> = Vec::new();
        let query = CatalogQuery::new().with_search("anything");
        let view = CatalogView::derive(&products, &query);

        assert_eq!(view.categories, vec!["Todos"]);
        assert!(view.featured.is_none());
        assert!(view.is_empty());
    }

    #[test]
    fn test_heading() {
        let products = vec![product(1, "a", "Casa", false)];

        let query = CatalogQuery::new();
        assert_eq!(CatalogView::derive(&products, &query).heading(), "Nossas Escolhas");

        let query = CatalogQuery::new().with_category("Casa");
        assert_eq!(CatalogView::derive(&products, &query).heading(), "Casa");
    }
}
