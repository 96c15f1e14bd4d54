//! API route configuration.
//!
//! Authentication is declared per handler through the
//! [`crate::domain::entities::Identity`] extractor rather than a router
//! layer, because `/url/shorten` accepts both anonymous and authenticated
//! callers.

use crate::api::handlers::{
    delete_link_handler, list_links_handler, login_handler, register_handler, shorten_handler,
    verify_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Account routes, mounted at `/auth`.
///
/// - `POST /register` - Create an account
/// - `POST /login`    - Exchange credentials for a token
/// - `GET  /verify`   - Resolve the bearer token to its account
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/verify", get(verify_handler))
}

/// Link routes, mounted at `/url`.
///
/// - `POST   /shorten` - Create a short link (token optional)
/// - `GET    /user`    - List the caller's links (token required)
/// - `DELETE /{id}`    - Delete one of the caller's links (token required)
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/user", get(list_links_handler))
        .route("/{id}", delete(delete_link_handler))
}
