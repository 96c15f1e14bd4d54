#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Duration;
use serde_json::{Value, json};
use shortlinks::infrastructure::memory::{MemoryLinkRepository, MemoryUserRepository};
use shortlinks::infrastructure::security::jwt::TokenSigner;
use shortlinks::routes::router;
use shortlinks::state::AppState;
use std::sync::Arc;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const BASE_URL: &str = "http://localhost:4000";

pub fn test_signer() -> TokenSigner {
    TokenSigner::new(TEST_SECRET, Duration::hours(24))
}

/// Application state over fresh in-memory repositories.
pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(MemoryUserRepository::new()),
        Arc::new(MemoryLinkRepository::new()),
        test_signer(),
        BASE_URL,
    )
}

pub fn create_test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Registers an account and returns `(user json, token)`.
pub async fn register(server: &TestServer, email: &str, password: &str) -> (Value, String) {
    let response = server
        .post("/auth/register")
        .json(&json!({ "email": email, "password": password }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    let token = body["token"].as_str().unwrap().to_string();
    (body["user"].clone(), token)
}

/// Shortens `url` with an optional slug and token, returning the response body.
pub async fn shorten(
    server: &TestServer,
    url: &str,
    slug: Option<&str>,
    token: Option<&str>,
) -> Value {
    let mut body = json!({ "url": url });
    if let Some(slug) = slug {
        body["slug"] = json!(slug);
    }

    let mut request = server.post("/url/shorten").json(&body);
    if let Some(token) = token {
        request = request.add_header("Authorization", bearer(token));
    }

    let response = request.await;
    assert_eq!(response.status_code(), 201);
    response.json()
}
