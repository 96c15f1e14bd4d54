//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::domain::repositories::{LinkRepository, UserRepository};
use crate::infrastructure::security::jwt::TokenSigner;

/// Handles to the services, cloned cheaply per request.
///
/// The same state is built for both storage backends; only the repository
/// implementations behind the trait objects differ.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub link_service: Arc<LinkService>,
    /// Used by the health check to probe the store.
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        links: Arc<dyn LinkRepository>,
        signer: TokenSigner,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users.clone(), signer)),
            link_service: Arc::new(LinkService::new(links, base_url)),
            users,
        }
    }
}
