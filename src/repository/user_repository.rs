use async_trait::async_trait;
use tracing::{debug, instrument};

use super::UserRepository;
use crate::actor_framework::{StoreClient, StoreResult};
use crate::domain::{eq_ignore_case, User};

/// User repository backed by the user store actor.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    inner: StoreClient<User>,
}

impl InMemoryUserRepository {
    pub fn new(inner: StoreClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    async fn get_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        debug!("Sending request");
        let email = email.to_string();
        self.inner.find(move |user| eq_ignore_case(&user.email, &email)).await
    }

    #[instrument(skip(self))]
    async fn get_active(&self) -> StoreResult<Vec<User>> {
        debug!("Sending request");
        self.inner.filter(|user| user.is_active).await
    }

    #[instrument(fields(email = %user.email), skip(self, user))]
    async fn create(&self, user: User) -> StoreResult<User> {
        debug!("Sending request");
        self.inner.insert(user).await
    }

    #[instrument(fields(id = %user.id), skip(self, user))]
    async fn update(&self, user: User) -> StoreResult<User> {
        debug!("Sending request");
        self.inner.update(user).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> StoreResult<bool> {
        debug!("Sending request");
        self.inner.delete(id).await
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: &str) -> StoreResult<bool> {
        debug!("Sending request");
        self.inner.exists(id).await
    }
}
