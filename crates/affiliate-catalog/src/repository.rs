//! The product repository seam.
//!
//! The HTTP client implements [`ProductRepository`] against the REST backend;
//! [`MemoryRepository`] implements it in-process for tests and offline use.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::catalog::{Product, ProductDraft};
use crate::ids::ProductId;
use crate::RepositoryError;

/// Typed CRUD over the `/products` resource.
///
/// Each call is one round trip with no retries. Callers decide how a failure
/// is presented; none of them is fatal.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch every product, in server order.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Create a product. The server assigns the id and checks slug uniqueness.
    async fn create(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;

    /// Replace every non-id field of an existing product.
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, RepositoryError>;

    /// Remove a product permanently.
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<R: ProductRepository + ?Sized> ProductRepository for std::sync::Arc<R> {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        (**self).list().await
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        (**self).create(draft).await
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        (**self).update(id, draft).await
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        (**self).delete(id).await
    }
}

/// Message returned by [`MemoryRepository`] for a duplicate slug.
pub const DUPLICATE_SLUG_MESSAGE: &str = "Slug já está em uso.";

#[derive(Debug, Default)]
struct MemoryState {
    products: Vec<Product>,
    next_id: i64,
    failures: VecDeque<RepositoryError>,
    list_calls: usize,
    mutation_calls: usize,
}

/// In-process repository that behaves like the backend.
///
/// Assigns sequential ids, rejects duplicate slugs with 409 and unknown ids
/// with 404. Failures queued with [`MemoryRepository::fail_next`] are
/// returned by the next calls, one per call, before any other effect.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    state: Mutex<MemoryState>,
}

impl MemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with drafts, numbered from 1.
    pub fn with_products(drafts: Vec<ProductDraft>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.lock();
            for draft in drafts {
                state.next_id += 1;
                let id = ProductId::new(state.next_id);
                state.products.push(Product::new(id, draft));
            }
        }
        repo
    }

    /// Queue an error for the next call.
    pub fn fail_next(&self, error: RepositoryError) {
        self.lock().failures.push_back(error);
    }

    /// Number of `list` calls served so far.
    pub fn list_calls(&self) -> usize {
        self.lock().list_calls
    }

    /// Number of create/update/delete calls served so far.
    pub fn mutation_calls(&self) -> usize {
        self.lock().mutation_calls
    }

    /// Snapshot of the stored products.
    pub fn snapshot(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // A poisoned lock only means a test panicked mid-call; the data is still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MemoryState {
    fn take_failure(&mut self) -> Result<(), RepositoryError> {
        match self.failures.pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn slug_taken(&self, slug: &str, except: Option<ProductId>) -> bool {
        self.products
            .iter()
            .any(|p| p.custom_slug == slug && p.id != except)
    }
}

#[async_trait]
impl ProductRepository for MemoryRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut state = self.lock();
        state.list_calls += 1;
        state.take_failure()?;
        Ok(state.products.clone())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let mut state = self.lock();
        state.mutation_calls += 1;
        state.take_failure()?;

        if state.slug_taken(&draft.custom_slug, None) {
            return Err(RepositoryError::rejected(409, Some(DUPLICATE_SLUG_MESSAGE.to_string())));
        }

        state.next_id += 1;
        let product = Product::new(ProductId::new(state.next_id), draft.clone());
        state.products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let mut state = self.lock();
        state.mutation_calls += 1;
        state.take_failure()?;

        if state.slug_taken(&draft.custom_slug, Some(id)) {
            return Err(RepositoryError::rejected(409, Some(DUPLICATE_SLUG_MESSAGE.to_string())));
        }

        let slot = state
            .products
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or(RepositoryError::rejected(404, None))?;
        *slot = Product::new(id, draft.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        state.mutation_calls += 1;
        state.take_failure()?;

        let before = state.products.len();
        state.products.retain(|p| p.id != Some(id));
        if state.products.len() == before {
            return Err(RepositoryError::rejected(404, None));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = MemoryRepository::new();
        let a = repo.create(&ProductDraft::new("a").with_slug("a")).await.unwrap();
        let b = repo.create(&ProductDraft::new("b").with_slug("b")).await.unwrap();

        assert_eq!(a.id, Some(ProductId::new(1)));
        assert_eq!(b.id, Some(ProductId::new(2)));
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_slug_rejected() {
        let repo = MemoryRepository::with_products(vec![ProductDraft::new("a").with_slug("dup")]);
        let err = repo
            .create(&ProductDraft::new("b").with_slug("dup"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(409));
        assert_eq!(err.server_message(), Some(DUPLICATE_SLUG_MESSAGE));
    }

    #[tokio::test]
    async fn test_update_keeps_own_slug() {
        let repo = MemoryRepository::with_products(vec![ProductDraft::new("a").with_slug("a")]);
        let updated = repo
            .update(ProductId::new(1), &ProductDraft::new("A!").with_slug("a"))
            .await
            .unwrap();
        assert_eq!(updated.display_title, "A!");
    }

    #[tokio::test]
    async fn test_delete_missing_is_404() {
        let repo = MemoryRepository::new();
        let err = repo.delete(ProductId::new(5)).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_queued_failure_consumed_once() {
        let repo = MemoryRepository::new();
        repo.fail_next(RepositoryError::Transport("down".to_string()));

        assert!(repo.list().await.is_err());
        assert!(repo.list().await.is_ok());
        assert_eq!(repo.list_calls(), 2);
    }
}
