use chrono::{Duration, Utc};

use crate::domain::User;

fn user(id: &str, email: &str, first_name: &str, last_name: &str, days_ago: i64, is_active: bool) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        created_at: Utc::now() - Duration::days(days_ago),
        is_active,
    }
}

/// Fixture accounts loaded into the user store at startup.
pub fn seed_users() -> Vec<User> {
    vec![
        user("1", "john.doe@example.com", "John", "Doe", 30, true),
        user("2", "jane.smith@example.com", "Jane", "Smith", 15, true),
        user("3", "inactive.user@example.com", "Inactive", "User", 60, false),
    ]
}
