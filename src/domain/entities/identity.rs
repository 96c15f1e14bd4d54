//! Authenticated caller identity.

use uuid::Uuid;

/// The resolved subject of a validated bearer token.
///
/// Produced only by [`crate::application::services::AuthService::authenticate`]
/// and passed explicitly into ownership-scoped operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
}

impl Identity {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}
