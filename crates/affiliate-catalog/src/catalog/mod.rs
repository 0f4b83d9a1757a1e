//! Product catalog module.
//!
//! Contains the product entity, drafts, and category labels.

mod category;
mod product;

pub use category::{category_labels, CategoryFilter, ALL_CATEGORIES};
pub use product::{Product, ProductDraft};
