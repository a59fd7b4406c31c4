use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::User;
use crate::error::UserError;
use crate::notify::EmailSender;
use crate::repository::UserRepository;

/// Account rules on top of a [`UserRepository`], with a welcome email on signup.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    email_sender: Arc<dyn EmailSender>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, email_sender: Arc<dyn EmailSender>) -> Self {
        Self {
            repository,
            email_sender,
        }
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>, UserError> {
        if id.trim().is_empty() {
            warn!("Rejected blank user id");
            return Err(UserError::InvalidArgument(
                "User ID cannot be null or empty".to_string(),
            ));
        }
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Blank emails resolve to `None` without a lookup.
    #[instrument(skip(self))]
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        if email.trim().is_empty() {
            return Ok(None);
        }
        Ok(self.repository.get_by_email(email).await?)
    }

    /// Registers a user and sends the welcome email.
    ///
    /// # Errors
    /// - [`UserError::InvalidArgument`] when the email has no `@`
    /// - [`UserError::AlreadyExists`] when the email is taken, ignoring case
    ///
    /// A failed welcome email is logged and does not undo the registration.
    #[instrument(fields(email = %user.email), skip(self, user))]
    pub async fn create(&self, mut user: User) -> Result<User, UserError> {
        if !user.is_email_valid() {
            warn!("Rejected invalid email");
            return Err(UserError::InvalidArgument("Invalid email address".to_string()));
        }

        if self.repository.get_by_email(&user.email).await?.is_some() {
            warn!("Email already registered");
            return Err(UserError::AlreadyExists(user.email));
        }

        user.id = Uuid::new_v4().to_string();
        user.created_at = Utc::now();

        let created = self.repository.create(user).await?;
        info!(user_id = %created.id, "User created successfully");

        match self
            .email_sender
            .send_welcome_email(&created.email, &created.full_name())
            .await
        {
            Ok(true) => debug!("Welcome email sent"),
            Ok(false) => warn!(user_id = %created.id, "Welcome email was not delivered"),
            Err(e) => warn!(user_id = %created.id, error = %e, "Welcome email failed"),
        }

        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_active_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.repository.get_active().await?)
    }

    /// Flips the active flag off. Returns `false` when the user does not exist.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: &str) -> Result<bool, UserError> {
        let Some(mut user) = self.repository.get_by_id(id).await? else {
            debug!("User not found");
            return Ok(false);
        };

        user.is_active = false;
        self.repository.update(user).await?;
        info!("User deactivated");
        Ok(true)
    }

    /// Replaces the stored profile of an existing user.
    #[instrument(fields(user_id = %user.id), skip(self, user))]
    pub async fn update(&self, user: User) -> Result<User, UserError> {
        if user.id.trim().is_empty() {
            warn!("Rejected update without id");
            return Err(UserError::InvalidArgument(
                "User ID is required for updates".to_string(),
            ));
        }

        if self.repository.get_by_id(&user.id).await?.is_none() {
            warn!("User not found for update");
            return Err(UserError::NotFound(user.id));
        }

        let updated = self.repository.update(user).await?;
        info!("User updated successfully");
        Ok(updated)
    }
}
