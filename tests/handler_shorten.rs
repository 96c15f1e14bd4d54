mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_anonymous_with_generated_slug() {
    let server = common::create_test_server();

    let response = server
        .post("/url/shorten")
        .json(&json!({ "url": "https://example.com/some/long/path?q=1" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    let slug = body["slug"].as_str().unwrap();
    assert_eq!(slug.len(), 8);
    assert!(
        slug.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
    assert_eq!(body["original"], "https://example.com/some/long/path?q=1");
    assert_eq!(body["shortUrl"], format!("{}/{}", common::BASE_URL, slug));
    assert_eq!(body["visits"], 0);
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_shorten_empty_slug_generates_one() {
    let server = common::create_test_server();

    let response = server
        .post("/url/shorten")
        .json(&json!({ "url": "https://example.com", "slug": "" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    let slug = body["slug"].as_str().unwrap();
    assert_eq!(slug.len(), 8);

    let redirect = server.get(&format!("/{slug}")).await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_shorten_with_custom_slug() {
    let server = common::create_test_server();

    let body = common::shorten(&server, "https://example.com", Some("my-link_1"), None).await;

    assert_eq!(body["slug"], "my-link_1");
    assert_eq!(body["shortUrl"], "http://localhost:4000/my-link_1");
}

#[tokio::test]
async fn test_shorten_slug_taken() {
    let server = common::create_test_server();
    common::shorten(&server, "https://example.com/a", Some("abc"), None).await;

    let response = server
        .post("/url/shorten")
        .json(&json!({ "url": "https://example.com/b", "slug": "abc" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"]["code"], "slug_taken");

    // The first mapping is untouched
    let redirect = server.get("/abc").await;
    assert_eq!(redirect.header("location"), "https://example.com/a");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::create_test_server();

    for url in [
        "",
        "not a url",
        "example.com",
        "ftp://example.com/file",
        "javascript:alert(1)",
    ] {
        let response = server
            .post("/url/shorten")
            .json(&json!({ "url": url }))
            .await;

        assert_eq!(response.status_code(), 400, "url: {url}");
        assert_eq!(response.json::<Value>()["error"]["code"], "invalid_url");
    }
}

#[tokio::test]
async fn test_shorten_invalid_slug() {
    let server = common::create_test_server();

    for slug in ["ab", "has space", "slash/slug", "health", "auth", "url"] {
        let response = server
            .post("/url/shorten")
            .json(&json!({ "url": "https://example.com", "slug": slug }))
            .await;

        assert_eq!(response.status_code(), 400, "slug: {slug}");
        assert_eq!(response.json::<Value>()["error"]["code"], "invalid_slug");
    }
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let server = common::create_test_server();

    let response = server
        .post("/url/shorten")
        .json(&json!({ "slug": "abc" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_shorten_with_invalid_token_is_rejected() {
    let server = common::create_test_server();

    let response = server
        .post("/url/shorten")
        .add_header("Authorization", common::bearer("not-a-jwt"))
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(response.json::<Value>()["error"]["code"], "invalid_token");
}

#[tokio::test]
async fn test_shorten_authenticated_link_is_owned() {
    let server = common::create_test_server();
    let (_, token) = common::register(&server, "owner@example.com", "owner-password").await;

    let created = common::shorten(&server, "https://example.com", Some("owned"), Some(&token)).await;
    common::shorten(&server, "https://example.com", Some("anon"), None).await;

    let list = server
        .get("/url/user")
        .add_header("Authorization", common::bearer(&token))
        .await;

    let links: Value = list.json();
    let links = links.as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_shorten_trailing_slash_is_normalized() {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    let app = shortlinks::routes::app_router(common::create_test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/url/shorten/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"url":"https://example.com"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}
