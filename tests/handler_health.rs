mod common;

use alias_shortener::routes::router;
use axum_test::TestServer;
use serde_json::Value;

#[tokio::test]
async fn test_health_ok() {
    let (state, _store) = common::create_test_state().await;
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_degraded_when_store_closed() {
    let (state, store) = common::create_test_state().await;
    let server = TestServer::new(router(state)).unwrap();
    store.pool().close().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}
