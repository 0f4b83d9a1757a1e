//! Admin mutation workflow state machine.
//!
//! The product form is a single slot: it is closed (`Idle`), open for a new
//! product (`Creating`), or open on an existing one (`Editing`). Every
//! successful mutation is followed by a full list refetch; the local list is
//! never patched in place.

use crate::admin::notification::{self, Notification};
use crate::admin::DashboardStats;
use crate::catalog::{Product, ProductDraft};
use crate::ids::ProductId;
use crate::repository::ProductRepository;
use crate::{RepositoryError, WorkflowError};

/// State of the product form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    /// Form closed, no target.
    #[default]
    Idle,
    /// Form open for a new product.
    Creating,
    /// Form open on an existing product.
    Editing(Product),
}

impl FormState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormState::Idle => "idle",
            FormState::Creating => "creating",
            FormState::Editing(_) => "editing",
        }
    }

    /// Check if the form is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Idle)
    }

    /// The product being edited, if any.
    pub fn target(&self) -> Option<&Product> {
        match self {
            FormState::Editing(product) => Some(product),
            _ => None,
        }
    }

    /// Values to pre-fill the form with.
    pub fn initial_draft(&self) -> ProductDraft {
        self.target().map(Product::to_draft).unwrap_or_default()
    }
}

/// One operator's admin session over a repository.
///
/// Methods take `&mut self`, so at most one mutation is in flight per
/// session.
#[derive(Debug)]
pub struct AdminWorkflow<R> {
    repository: R,
    form: FormState,
    products: Vec<Product>,
    loading: bool,
    notifications: Vec<Notification>,
}

impl<R: ProductRepository> AdminWorkflow<R> {
    /// Create a workflow. The list starts empty and loading until the first
    /// [`refresh`](Self::refresh).
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            form: FormState::Idle,
            products: Vec::new(),
            loading: true,
            notifications: Vec::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The last successfully fetched list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_products(&self.products)
    }

    /// Find a product in the fetched list.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == Some(id))
    }

    /// "Add": open the form for a new product.
    pub fn open_create(&mut self) {
        self.form = FormState::Creating;
    }

    /// "Edit": open the form on an existing product.
    pub fn open_edit(&mut self, product: Product) {
        self.form = FormState::Editing(product);
    }

    /// "Close": discard the form without any network call.
    pub fn close(&mut self) {
        self.form = FormState::Idle;
    }

    /// Refetch the whole list.
    ///
    /// On failure the previous list is kept and a load-failure notification is
    /// emitted.
    pub async fn refresh(&mut self) -> Result<(), RepositoryError> {
        self.loading = true;
        let result = self.repository.list().await;
        self.loading = false;

        match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "admin list refreshed");
                self.products = products;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "admin list refresh failed");
                self.notify(Notification::error(notification::LOAD_FAILED));
                Err(e)
            }
        }
    }

    /// "Save": create or update depending on the form state.
    ///
    /// On success the form closes, a success notification is emitted, and the
    /// list is refetched. On failure the form stays as it was and the server's
    /// message (or a generic one) is emitted.
    pub async fn save(&mut self, draft: ProductDraft) -> Result<Product, WorkflowError> {
        let target_id = match &self.form {
            FormState::Idle => return Err(WorkflowError::FormClosed),
            FormState::Creating => None,
            // A target without an id has never been saved, so it is created.
            FormState::Editing(target) => target.id,
        };

        let result = match target_id {
            Some(id) => self.repository.update(id, &draft).await,
            None => self.repository.create(&draft).await,
        };

        match result {
            Ok(saved) => {
                let (action, message) = match target_id {
                    Some(_) => ("update", notification::UPDATED),
                    None => ("create", notification::CREATED),
                };
                tracing::info!(id = ?saved.id, slug = %saved.custom_slug, action, "product saved");
                self.form = FormState::Idle;
                self.notify(Notification::success(message));
                // Refetch failures surface as a load-failure notification.
                let _ = self.refresh().await;
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(error = %e, form = self.form.as_str(), "product save failed");
                self.notify(Notification::error(e.user_message(notification::SAVE_FAILED)));
                Err(e.into())
            }
        }
    }

    /// "Delete": remove a product immediately, independent of the form.
    pub async fn delete(&mut self, id: ProductId) -> Result<(), RepositoryError> {
        match self.repository.delete(id).await {
            Ok(()) => {
                tracing::info!(%id, "product deleted");
                self.notify(Notification::success(notification::DELETED));
                let _ = self.refresh().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "product delete failed");
                self.notify(Notification::error(notification::DELETE_FAILED));
                Err(e)
            }
        }
    }

    /// Notifications emitted since the last drain.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Take every pending notification.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::NotificationLevel;
    use crate::repository::{MemoryRepository, DUPLICATE_SLUG_MESSAGE};

    fn seeded() -> AdminWorkflow<MemoryRepository> {
        AdminWorkflow::new(MemoryRepository::with_products(vec![
            ProductDraft::new("Mouse").with_slug("mouse"),
            ProductDraft::new("Teclado").with_slug("teclado").with_featured(true),
        ]))
    }

    #[test]
    fn test_transitions() {
        let mut flow = seeded();
        assert_eq!(flow.form(), &FormState::Idle);
        assert!(flow.is_loading());

        flow.open_create();
        assert_eq!(flow.form(), &FormState::Creating);

        let target = Product::new(ProductId::new(1), ProductDraft::new("Mouse"));
        flow.open_edit(target.clone());
        assert_eq!(flow.form().target(), Some(&target));
        assert_eq!(flow.form().initial_draft().display_title, "Mouse");

        flow.open_create();
        assert_eq!(flow.form(), &FormState::Creating);
        assert_eq!(flow.form().initial_draft(), ProductDraft::default());

        flow.close();
        assert!(!flow.form().is_open());
        assert_eq!(flow.repository().list_calls(), 0);
        assert_eq!(flow.repository().mutation_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_success_refetches_once() {
        let mut flow = seeded();
        flow.refresh().await.unwrap();
        assert!(!flow.is_loading());

        flow.open_create();
        let saved = flow
            .save(ProductDraft::new("Monitor").with_slug("monitor"))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(ProductId::new(3)));
        assert_eq!(flow.form(), &FormState::Idle);
        assert_eq!(flow.repository().list_calls(), 2);
        assert_eq!(flow.products().len(), 3);
        assert_eq!(
            flow.drain_notifications(),
            vec![Notification::success(notification::CREATED)]
        );
        assert!(flow.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_update_uses_target_id() {
        let mut flow = seeded();
        flow.refresh().await.unwrap();

        let target = flow.find(ProductId::new(1)).cloned().unwrap();
        flow.open_edit(target.clone());
        let draft = target.to_draft().with_price("R$ 99,00");
        flow.save(draft).await.unwrap();

        assert_eq!(flow.form(), &FormState::Idle);
        assert_eq!(flow.find(ProductId::new(1)).unwrap().display_price, "R$ 99,00");
        assert_eq!(flow.products().len(), 2);
        assert_eq!(flow.repository().list_calls(), 2);
        assert_eq!(flow.notifications()[0].message, notification::UPDATED);
    }

    #[tokio::test]
    async fn test_editing_unsaved_target_creates() {
        let mut flow = seeded();
        flow.open_edit(Product::unsaved(ProductDraft::new("Rascunho")));
        let saved = flow
            .save(ProductDraft::new("Rascunho").with_slug("rascunho"))
            .await
            .unwrap();

        assert!(saved.is_saved());
        assert_eq!(flow.notifications()[0].message, notification::CREATED);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_form_and_skips_refetch() {
        let mut flow = seeded();
        flow.refresh().await.unwrap();

        flow.open_create();
        let err = flow
            .save(ProductDraft::new("Outro mouse").with_slug("mouse"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), format!("Server rejected request (409): {}", DUPLICATE_SLUG_MESSAGE));
        assert_eq!(flow.form(), &FormState::Creating);
        assert_eq!(flow.repository().list_calls(), 1);
        assert_eq!(
            flow.notifications(),
            &[Notification::error(DUPLICATE_SLUG_MESSAGE)]
        );
    }

    #[tokio::test]
    async fn test_failed_update_without_message_uses_fallback() {
        let mut flow = seeded();
        flow.refresh().await.unwrap();

        let target = flow.find(ProductId::new(2)).cloned().unwrap();
        flow.open_edit(target.clone());
        flow.repository()
            .fail_next(RepositoryError::rejected(500, None));

        assert!(flow.save(target.to_draft()).await.is_err());
        assert_eq!(flow.form(), &FormState::Editing(target));
        assert_eq!(flow.notifications()[0].message, notification::SAVE_FAILED);
        assert_eq!(flow.notifications()[0].level, NotificationLevel::Error);
    }

    #[tokio::test]
    async fn test_save_while_idle_is_rejected_locally() {
        let mut flow = seeded();
        let err = flow.save(ProductDraft::new("x")).await.unwrap_err();

        assert_eq!(err, WorkflowError::FormClosed);
        assert_eq!(flow.repository().mutation_calls(), 0);
        assert!(flow.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_delete_refetches_and_leaves_form_alone() {
        let mut flow = seeded();
        flow.refresh().await.unwrap();
        flow.open_create();

        flow.delete(ProductId::new(1)).await.unwrap();

        assert_eq!(flow.form(), &FormState::Creating);
        assert_eq!(flow.products().len(), 1);
        assert!(flow
            .repository()
            .snapshot()
            .iter()
            .all(|p| p.id != Some(ProductId::new(1))));
        assert_eq!(flow.repository().list_calls(), 2);
        assert_eq!(flow.notifications()[0].message, notification::DELETED);
    }

    #[tokio::test]
    async fn test_delete_failure_is_generic_and_keeps_list() {
        let mut flow = seeded();
        flow.refresh().await.unwrap();

        let err = flow.delete(ProductId::new(404)).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(flow.products().len(), 2);
        assert_eq!(flow.repository().list_calls(), 1);
        assert_eq!(
            flow.notifications(),
            &[Notification::error(notification::DELETE_FAILED)]
        );
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_list() {
        let mut flow = seeded();
        flow.refresh().await.unwrap();

        flow.repository()
            .fail_next(RepositoryError::Transport("offline".to_string()));
        assert!(flow.refresh().await.is_err());

        assert_eq!(flow.products().len(), 2);
        assert!(!flow.is_loading());
        assert_eq!(
            flow.notifications(),
            &[Notification::error(notification::LOAD_FAILED)]
        );
    }

    #[tokio::test]
    async fn test_stats_follow_refetch() {
        let mut flow = seeded();
        assert_eq!(flow.stats().last_product_label(), "Nenhum produto");

        flow.refresh().await.unwrap();
        let stats = flow.stats();
        assert_eq!(stats.active, 2);
        assert_eq!(stats.featured, 1);
        assert_eq!(stats.last_product_label(), "Teclado");
    }
}
