mod common;

use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_delete_existing_alias() {
    let pool = common::test_pool().await;
    common::create_test_url(&pool, "ex", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    let response = server
        .delete("/url/ex")
        .add_header("authorization", common::valid_auth())
        .await;

    assert_eq!(response.status_code(), 200);
    response.assert_json(&json!({ "status": "OK", "alias": "ex" }));
    assert_eq!(common::count_urls(&pool).await, 0);

    let redirect = server.get("/ex").await;
    assert_eq!(redirect.status_code(), 404);
}

#[tokio::test]
async fn test_delete_missing_alias() {
    let pool = common::test_pool().await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .delete("/url/missing")
        .add_header("authorization", common::valid_auth())
        .await;

    assert_eq!(response.status_code(), 404);
    response.assert_json(&json!({ "status": "Error", "error": "not found" }));
}

#[tokio::test]
async fn test_delete_requires_auth() {
    let pool = common::test_pool().await;
    common::create_test_url(&pool, "ex", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    let response = server.delete("/url/ex").await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(common::count_urls(&pool).await, 1);
}
