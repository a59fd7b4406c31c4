use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: String::new(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            created_at: DateTime::<Utc>::default(),
            is_active: true,
        }
    }
}

impl User {
    /// Creates a new active User.
    ///
    /// # Notes
    /// The `id` and `created_at` fields are placeholders until the user is stored.
    pub fn new(email: impl Into<String>, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// First and last name joined by one space, trimmed at the outer edges only.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Shape check only: non-blank and contains `@`.
    pub fn is_email_valid(&self) -> bool {
        !self.email.trim().is_empty() && self.email.contains('@')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(first: &str, last: &str) -> User {
        User::new("someone@example.com", first, last)
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::default();
        assert!(user.is_active);
        assert!(user.id.is_empty());
        assert!(user.email.is_empty());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(named("John", "Doe").full_name(), "John Doe");
        assert_eq!(named("John", "").full_name(), "John");
        assert_eq!(named("", "Doe").full_name(), "Doe");
        assert_eq!(named("", "").full_name(), "");
        assert_eq!(named("   ", "   ").full_name(), "");
    }

    #[test]
    fn test_full_name_keeps_inner_whitespace() {
        assert_eq!(named("  John  ", "  Doe  ").full_name(), "John     Doe");
    }

    #[test]
    fn test_email_shape_check() {
        let valid = ["john.doe@example.com", "user.name+tag@sub.domain.org", "@", "user@@domain.com"];
        for email in valid {
            assert!(User::new(email, "A", "B").is_email_valid(), "{email} should pass");
        }

        let invalid = ["", "   ", "invalidemail.com"];
        for email in invalid {
            assert!(!User::new(email, "A", "B").is_email_valid(), "{email:?} should fail");
        }
    }

    #[test]
    fn test_missing_active_flag_defaults_to_true() {
        let user: User = serde_json::from_str(r#"{"email":"a@b.com","firstName":"A"}"#).unwrap();
        assert!(user.is_active);
        assert_eq!(user.first_name, "A");
        assert_eq!(user.last_name, "");
    }
}
