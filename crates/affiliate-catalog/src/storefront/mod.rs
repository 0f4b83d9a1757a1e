//! Public storefront.
//!
//! The storefront loads the product list once and answers every search or
//! category change from that cached list.

mod query;
mod view;

pub use query::CatalogQuery;
pub use view::{CatalogView, DEFAULT_HEADING};

use crate::catalog::{CategoryFilter, Product};
use crate::repository::ProductRepository;
use crate::RepositoryError;

/// Shown when the list could not be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Oops! Não foi possível carregar os produtos.";
/// Secondary line under [`LOAD_FAILED_MESSAGE`].
pub const LOAD_FAILED_HINT: &str = "Tente novamente mais tarde.";
/// Shown when the filters leave the grid empty.
pub const NO_RESULTS_MESSAGE: &str = "Nenhum produto encontrado para sua busca.";

/// Where the product list is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// The first load has not finished.
    #[default]
    Loading,
    /// The list arrived.
    Ready(Vec<Product>),
    /// The first list call failed; no list was ever loaded.
    Failed,
}

/// What the storefront shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontPage<'a> {
    /// Skeletons; no hero, no grid.
    Loading,
    /// The load failed; the generic message is shown in place of the grid.
    Failed,
    /// The derived view.
    Ready(CatalogView<'a>),
}

impl StorefrontPage<'_> {
    /// The message displayed instead of product cards, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            StorefrontPage::Loading => None,
            StorefrontPage::Failed => Some(LOAD_FAILED_MESSAGE),
            StorefrontPage::Ready(view) if view.is_empty() => Some(NO_RESULTS_MESSAGE),
            StorefrontPage::Ready(_) => None,
        }
    }
}

/// One shopper's storefront session.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    state: LoadState,
    query: CatalogQuery,
}

impl Storefront {
    /// Create a storefront that has not loaded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storefront from an already-fetched list.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            state: LoadState::Ready(products),
            query: CatalogQuery::default(),
        }
    }

    /// Fetch the list. The error is returned for the caller to log; it is
    /// never fatal.
    ///
    /// A failed first load moves the session to [`LoadState::Failed`]. A
    /// failed reload keeps the list from the last successful load.
    pub async fn load<R>(&mut self, repository: &R) -> Result<(), RepositoryError>
    where
        R: ProductRepository + ?Sized,
    {
        let previous = match std::mem::take(&mut self.state) {
            LoadState::Ready(products) => Some(products),
            LoadState::Loading | LoadState::Failed => None,
        };

        match repository.list().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "storefront loaded products");
                self.state = LoadState::Ready(products);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, stale = previous.is_some(), "storefront failed to load products");
                self.state = match previous {
                    Some(products) => LoadState::Ready(products),
                    None => LoadState::Failed,
                };
                Err(e)
            }
        }
    }

    /// Update the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Select a category chip by label.
    pub fn select_category(&mut self, label: impl Into<String>) {
        self.query.category = CategoryFilter::from_label(label);
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Cached products, if loaded.
    pub fn products(&self) -> Option<&[Product]> {
        match &self.state {
            LoadState::Ready(products) => Some(products),
            _ => None,
        }
    }

    /// Find a loaded product by id for the detail view.
    pub fn find(&self, id: crate::ProductId) -> Option<&Product> {
        self.products()?.iter().find(|p| p.id == Some(id))
    }

    /// Derive the current page.
    pub fn page(&self) -> StorefrontPage<'_> {
        match &self.state {
            LoadState::Loading => StorefrontPage::Loading,
            LoadState::Failed => StorefrontPage::Failed,
            LoadState::Ready(products) => {
                StorefrontPage::Ready(CatalogView::derive(products, &self.query))
            }
        }
    }
}
