mod common;

use alias_shortener::routes::router;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state().await;
    common::create_test_mapping(&store, "redirect1", "https://example.com/target").await;
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store) = common::create_test_state().await;
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "status": "ERROR", "error": "not found" }));
}

#[tokio::test]
async fn test_redirect_store_unavailable() {
    let (state, store) = common::create_test_state().await;
    let server = TestServer::new(router(state)).unwrap();
    store.pool().close().await;

    let response = server.get("/anything").await;

    assert_eq!(response.status_code(), 500);
    response.assert_json(&json!({ "status": "ERROR", "error": "internal error" }));
}

#[tokio::test]
async fn test_redirect_assigns_request_id() {
    let (state, store) = common::create_test_state().await;
    common::create_test_mapping(&store, "rid", "https://example.com").await;
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/rid").await;

    assert_eq!(response.status_code(), 302);
    assert!(!response.header("x-request-id").is_empty());
}

#[tokio::test]
async fn test_create_resolve_delete_scenario() {
    let (state, _store) = common::create_test_state().await;
    let server = TestServer::new(router(state)).unwrap();

    let created = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;
    created.assert_json(&json!({ "status": "OK", "alias": "ex1" }));

    let redirect = server.get("/ex1").await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://example.com");

    let duplicate = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "ex1" }))
        .await;
    assert_eq!(duplicate.status_code(), 409);

    let deleted = server.delete("/url/ex1").await;
    deleted.assert_json(&json!({ "status": "OK" }));

    server.get("/ex1").await.assert_status_not_found();
}
