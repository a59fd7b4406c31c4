use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::Product;
use crate::error::ProductError;
use crate::repository::ProductRepository;

/// Catalog rules on top of a [`ProductRepository`].
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Product>, ProductError> {
        if id.trim().is_empty() {
            warn!("Rejected blank product id");
            return Err(ProductError::InvalidArgument(
                "Product ID cannot be null or empty".to_string(),
            ));
        }
        Ok(self.repository.get_by_id(id).await?)
    }

    /// In-stock products. The repository already filters, the second pass is
    /// idempotent and keeps the result correct for any repository.
    #[instrument(skip(self))]
    pub async fn get_available(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.repository.get_in_stock().await?;
        let available: Vec<Product> = products.into_iter().filter(Product::is_in_stock).collect();
        debug!(count = available.len(), "Listed available products");
        Ok(available)
    }

    /// Blank categories short-circuit to an empty list without touching storage.
    #[instrument(skip(self))]
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, ProductError> {
        if category.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.repository.get_by_category(category).await?)
    }

    /// Validates and stores a new product.
    ///
    /// The product gets an opaque id before it reaches the repository; the
    /// repository's id scheme decides whether that id survives.
    #[instrument(fields(name = %product.name), skip(self, product))]
    pub async fn create(&self, mut product: Product) -> Result<Product, ProductError> {
        if product.name.trim().is_empty() {
            warn!("Rejected product without a name");
            return Err(ProductError::InvalidArgument("Product name is required".to_string()));
        }
        if product.price < Decimal::ZERO {
            warn!(price = %product.price, "Rejected negative price");
            return Err(ProductError::InvalidArgument(
                "Product price cannot be negative".to_string(),
            ));
        }

        product.id = Uuid::new_v4().to_string();
        let created = self.repository.create(product).await?;
        info!(product_id = %created.id, "Product created successfully");
        Ok(created)
    }

    /// Sum of `price * stock` over the in-stock products only.
    ///
    /// # Errors
    /// [`ProductError::Overflow`] when a product value or the running total
    /// leaves the `Decimal` range.
    pub fn calculate_total_value(&self, products: &[Product]) -> Result<Decimal, ProductError> {
        products
            .iter()
            .filter(|product| product.is_in_stock())
            .try_fold(Decimal::ZERO, |total, product| {
                total
                    .checked_add(product.stock_value()?)
                    .ok_or(ProductError::Overflow)
            })
    }

    /// Takes `percentage` percent off the product's price and persists it.
    ///
    /// Returns `false`, with nothing persisted, when the product is missing
    /// or the percentage is outside `[0, 100]`.
    #[instrument(skip(self))]
    pub async fn apply_discount(&self, id: &str, percentage: Decimal) -> Result<bool, ProductError> {
        let Some(mut product) = self.repository.get_by_id(id).await? else {
            debug!("Product not found");
            return Ok(false);
        };

        match product.calculate_discount_price(percentage) {
            Ok(price) => {
                product.price = price;
                self.repository.update(product).await?;
                info!(new_price = %price, "Discount applied");
                Ok(true)
            }
            Err(e @ ProductError::DiscountOutOfRange(_)) => {
                warn!(error = %e, "Discount rejected");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
