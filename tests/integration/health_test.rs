//! Integration tests for the health endpoint.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();

    let response = app
        .request("GET", "/api/v1/nothing-here", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
