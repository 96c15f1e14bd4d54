//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account.
///
/// `password_hash` is a PHC-format Argon2 string. It is never serialized;
/// API responses go through [`crate::api::dto::auth::UserResponse`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Builds a new user record, normalizing the email to its lowercase trimmed form.
    pub fn new(email: &str, password_hash: String) -> Self {
        Self {
            email: normalize_email(email),
            password_hash,
        }
    }
}

/// Canonical form of an email used as the login key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_email() {
        let user = NewUser::new("  Alice@Example.COM ", "hash".to_string());
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.password_hash, "hash");
    }

    #[test]
    fn test_normalize_email_is_idempotent() {
        let once = normalize_email("Bob@Example.com");
        assert_eq!(normalize_email(&once), once);
    }
}
