//! Short link entity representing a slug to URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A shortened URL with its owner and visit counter.
///
/// `owner_id` is `None` for links created anonymously. Such links resolve
/// for everyone but never show up in ownership-scoped listings.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortLink {
    pub id: Uuid,
    pub slug: String,
    pub original: String,
    pub owner_id: Option<Uuid>,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Returns true if `user_id` owns this link.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == Some(user_id)
    }

    /// Returns true if the link was created without an owner.
    pub fn is_anonymous(&self) -> bool {
        self.owner_id.is_none()
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub slug: String,
    pub original: String,
    pub owner_id: Option<Uuid>,
}
