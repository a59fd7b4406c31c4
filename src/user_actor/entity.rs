use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::User;

impl Entity for User {
    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    /// Stamps the creation time, replacing whatever the caller supplied.
    fn on_create(&mut self) {
        self.created_at = Utc::now();
    }

    /// Replaces the user's profile information.
    ///
    /// # Fields Updated
    /// - `email`, `first_name`, `last_name`, `is_active`
    ///
    /// `id` and `created_at` are never touched by an update.
    fn on_update(&mut self, incoming: User) {
        self.email = incoming.email;
        self.first_name = incoming.first_name;
        self.last_name = incoming.last_name;
        self.is_active = incoming.is_active;
    }
}
