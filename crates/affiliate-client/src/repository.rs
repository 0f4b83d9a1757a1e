//! `ProductRepository` over the REST `/products` resource.

use affiliate_catalog::catalog::{Product, ProductDraft};
use affiliate_catalog::repository::ProductRepository;
use affiliate_catalog::{ProductId, RepositoryError};
use async_trait::async_trait;

use crate::client::ApiClient;

/// Collection path of the resource.
pub const PRODUCTS_PATH: &str = "products";

fn product_path(id: ProductId) -> String {
    format!("{}/{}", PRODUCTS_PATH, id)
}

/// Products backed by the HTTP API.
///
/// | Operation | Method | Path |
/// |---|---|---|
/// | list | GET | /products |
/// | create | POST | /products |
/// | update | PUT | /products/{id} |
/// | delete | DELETE | /products/{id} |
#[derive(Debug, Clone)]
pub struct HttpProductRepository {
    client: ApiClient,
}

impl HttpProductRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductRepository for HttpProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        self.client.get(PRODUCTS_PATH).await
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        self.client.post(PRODUCTS_PATH, draft).await
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        self.client.put(&product_path(id), draft).await
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.client.delete(&product_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_path() {
        assert_eq!(product_path(ProductId::new(12)), "products/12");
    }
}
