//! Affiliate product catalog.
//!
//! This crate holds everything about the catalog that does not touch the network:
//!
//! - **Catalog**: the `Product` entity, drafts, and category labels
//! - **Storefront**: the public view derived from a product list (featured hero,
//!   category chips, filtered grid)
//! - **Admin**: the create/edit/delete workflow and dashboard statistics
//! - **Repository**: the `ProductRepository` seam the HTTP client implements
//!
//! # Example
//!
//! ```rust
//! use affiliate_catalog::prelude::*;
//!
//! let products = vec![
//!     Product::new(ProductId::new(1), ProductDraft::new("Wireless Mouse").with_category("Tech")),
//!     Product::new(ProductId::new(2), ProductDraft::new("Yoga Mat").with_category("Fitness")),
//! ];
//!
//! let query = CatalogQuery::new().with_search("mouse");
//! let view = CatalogView::derive(&products, &query);
//!
//! assert_eq!(view.categories, vec!["Todos", "Tech", "Fitness"]);
//! assert_eq!(view.products.len(), 1);
//! ```

pub mod error;
pub mod ids;

pub mod admin;
pub mod catalog;
pub mod repository;
pub mod storefront;

pub use error::{RepositoryError, WorkflowError};
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{RepositoryError, WorkflowError};
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{CategoryFilter, Product, ProductDraft, ALL_CATEGORIES};

    // Storefront
    pub use crate::storefront::{
        CatalogQuery, CatalogView, LoadState, Storefront, StorefrontPage,
    };

    // Admin
    pub use crate::admin::{
        AdminWorkflow, DashboardStats, FormState, Notification, NotificationLevel,
    };

    // Repository
    pub use crate::repository::{MemoryRepository, ProductRepository};
}
