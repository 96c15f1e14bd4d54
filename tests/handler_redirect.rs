mod common;

use serde_json::Value;

#[tokio::test]
async fn test_redirect_counts_each_visit() {
    let server = common::create_test_server();
    let (_, token) = common::register(&server, "alice@example.com", "alice-password").await;
    common::shorten(&server, "https://example.com/target", Some("abc"), Some(&token)).await;

    let first = server.get("/abc").await;
    assert_eq!(first.status_code(), 302);
    assert_eq!(first.header("location"), "https://example.com/target");

    let links: Value = server
        .get("/url/user")
        .add_header("Authorization", common::bearer(&token))
        .await
        .json();
    assert_eq!(links[0]["visits"], 1);

    server.get("/abc").await;

    let links: Value = server
        .get("/url/user")
        .add_header("Authorization", common::bearer(&token))
        .await
        .json();
    assert_eq!(links[0]["visits"], 2);
}

#[tokio::test]
async fn test_redirect_preserves_target_verbatim() {
    let server = common::create_test_server();
    let target = "https://Example.com/Path/../x?b=2&a=1#frag";
    common::shorten(&server, target, Some("exact"), None).await;

    let response = server.get("/exact").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), target);
}

#[tokio::test]
async fn test_redirect_unknown_slug_is_plain_not_found() {
    let server = common::create_test_server();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_redirect_anonymous_link() {
    let server = common::create_test_server();
    let link = common::shorten(&server, "https://example.com/anon", None, None).await;
    let slug = link["slug"].as_str().unwrap();

    let response = server.get(&format!("/{slug}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/anon");
}
