mod common;

use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_redirect_found() {
    let pool = common::test_pool().await;
    common::create_test_url(&pool, "ex", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/ex").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_does_not_require_auth() {
    let pool = common::test_pool().await;
    common::create_test_url(&pool, "open", "https://example.com/open").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/open").await;

    assert_eq!(response.status_code(), 302);
    assert!(response.maybe_header("www-authenticate").is_none());
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::test_pool().await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/doesnotexist").await;

    assert_eq!(response.status_code(), 404);
    response.assert_json(&json!({ "status": "Error", "error": "not found" }));
}

#[tokio::test]
async fn test_redirect_preserves_stored_url() {
    let target = "https://example.com/path/with%20space?a=1&b=2#frag";

    let pool = common::test_pool().await;
    common::create_test_url(&pool, "q", target).await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/q").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), target);
}

#[tokio::test]
async fn test_unknown_path_not_found() {
    let pool = common::test_pool().await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/a/b/c").await;

    assert_eq!(response.status_code(), 404);
    response.assert_json(&json!({ "status": "Error", "error": "not found" }));
}

#[tokio::test]
async fn test_wrong_method_returns_envelope() {
    let pool = common::test_pool().await;
    common::create_test_url(&pool, "ex", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    for response in [server.put("/ex").await, server.delete("/health").await] {
        assert_eq!(response.status_code(), 405);
        response.assert_json(&json!({ "status": "Error", "error": "method not allowed" }));
    }
}
