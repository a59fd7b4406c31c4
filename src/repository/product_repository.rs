use async_trait::async_trait;
use tracing::{debug, instrument};

use super::ProductRepository;
use crate::actor_framework::{StoreClient, StoreResult};
use crate::domain::{eq_ignore_case, Product};

/// Product repository backed by the product store actor.
#[derive(Clone)]
pub struct InMemoryProductRepository {
    inner: StoreClient<Product>,
}

impl InMemoryProductRepository {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    async fn get_by_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        debug!("Sending request");
        let category = category.to_string();
        self.inner
            .filter(move |product| eq_ignore_case(&product.category, &category))
            .await
    }

    #[instrument(skip(self))]
    async fn get_in_stock(&self) -> StoreResult<Vec<Product>> {
        debug!("Sending request");
        self.inner.filter(Product::is_in_stock).await
    }

    #[instrument(fields(name = %product.name), skip(self, product))]
    async fn create(&self, product: Product) -> StoreResult<Product> {
        debug!("Sending request");
        self.inner.insert(product).await
    }

    #[instrument(fields(id = %product.id), skip(self, product))]
    async fn update(&self, product: Product) -> StoreResult<Product> {
        debug!("Sending request");
        self.inner.update(product).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> StoreResult<bool> {
        debug!("Sending request");
        self.inner.delete(id).await
    }
}
