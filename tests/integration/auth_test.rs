//! Integration tests for bearer token handling.

mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

use folderhub_auth::jwt::Claims;
use folderhub_entity::user::UserRole;

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/folders/", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["detail"], "Not authenticated");
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthorized() {
    let app = helpers::TestApp::new();
    let (_, token) = app.new_user();

    let req = axum::http::Request::builder()
        .uri("/api/v1/folders/")
        .header("Authorization", format!("Token {token}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), req)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/v1/folders/", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let app = helpers::TestApp::new();
    let mut other = app.config.auth.clone();
    other.jwt_secret = "some-other-secret".to_string();
    let token = folderhub_auth::jwt::JwtEncoder::new(&other)
        .encode(Uuid::new_v4(), UserRole::User, chrono::Duration::hours(1))
        .unwrap();

    let response = app
        .request("GET", "/api/v1/folders/", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = helpers::TestApp::new();
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4(),
        role: UserRole::User,
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = app.encoder.encode_claims(&claims).unwrap();

    let response = app
        .request("GET", "/api/v1/folders/", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_pending_user_is_forbidden() {
    let app = helpers::TestApp::new();
    let token = app.token_for(Uuid::new_v4(), UserRole::Pending);

    let response = app
        .request("GET", "/api/v1/folders/", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_sees_only_own_folders() {
    let app = helpers::TestApp::new();
    let (_, user_token) = app.new_user();
    app.create_folder(&user_token, "Private").await;

    let admin_token = app.token_for(Uuid::new_v4(), UserRole::Admin);
    let response = app
        .request("GET", "/api/v1/folders/", None, Some(&admin_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!([]));
}
