//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository calls,
//! validation and business rules. They consume repository traits through
//! `Arc<dyn ...>` handles injected at construction and expose a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Registration, login and token verification
//! - [`services::link_service::LinkService`] - Slug allocation, redirects and owned-link management

pub mod services;
