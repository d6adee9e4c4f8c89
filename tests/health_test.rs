//! Integration tests for the health endpoint.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["status"], "ok");
    assert_eq!(data["backend"], "memory");
    assert!(data["version"].as_str().is_some_and(|v| !v.is_empty()));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/nope", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
