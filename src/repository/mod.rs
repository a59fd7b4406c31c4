//! Repository layer: storage ports used by the services and their in-memory
//! implementations backed by the store actors.

mod product_repository;
mod user_repository;

pub use product_repository::InMemoryProductRepository;
pub use user_repository::InMemoryUserRepository;

use async_trait::async_trait;

use crate::actor_framework::StoreResult;
use crate::domain::{Product, User};

/// Storage port for products.
///
/// Lookups report absence as `None`, an empty `Vec` or `false`. Only
/// `update` treats a missing record as an error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>>;
    async fn get_by_category(&self, category: &str) -> StoreResult<Vec<Product>>;
    async fn get_in_stock(&self) -> StoreResult<Vec<Product>>;
    async fn create(&self, product: Product) -> StoreResult<Product>;
    async fn update(&self, product: Product) -> StoreResult<Product>;
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}

/// Storage port for users. Performs no email uniqueness check of its own.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<User>>;
    async fn get_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn get_active(&self) -> StoreResult<Vec<User>>;
    async fn create(&self, user: User) -> StoreResult<User>;
    async fn update(&self, user: User) -> StoreResult<User>;
    async fn delete(&self, id: &str) -> StoreResult<bool>;
    async fn exists(&self, id: &str) -> StoreResult<bool>;
}
