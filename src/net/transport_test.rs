use axum::http::StatusCode;

use super::*;
use crate::config::ApiConfig;
use crate::test_support::spawn_login_server;

#[tokio::test]
async fn native_posts_credentials_as_json() {
    let server = spawn_login_server(StatusCode::OK, r#"{"token":"abc123"}"#).await;
    let url = ApiConfig::new(&server.api_url).login_url();

    let resp = NativeTransport::new()
        .unwrap()
        .post_login(&url, &LoginRequest::new("u", "p"))
        .await
        .unwrap();

    assert_eq!(resp.issued_token(), Some("abc123"));
    assert_eq!(server.requests(), vec![serde_json::json!({ "username": "u", "password": "p" })]);
}

#[tokio::test]
async fn native_maps_error_status_with_body() {
    let body = r#"{"non_field_errors":["Unable to log in with provided credentials."]}"#;
    let server = spawn_login_server(StatusCode::BAD_REQUEST, body).await;
    let url = ApiConfig::new(&server.api_url).login_url();

    let err = NativeTransport::new()
        .unwrap()
        .post_login(&url, &LoginRequest::new("u", "wrong"))
        .await
        .unwrap_err();

    match err {
        AuthError::Status { status, body: got } => {
            assert_eq!(status, 400);
            assert_eq!(got, body);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn native_rejects_malformed_body() {
    let server = spawn_login_server(StatusCode::OK, "not json").await;
    let url = ApiConfig::new(&server.api_url).login_url();

    let err = NativeTransport::new()
        .unwrap()
        .post_login(&url, &LoginRequest::new("u", "p"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Parse(_)));
}

#[tokio::test]
async fn native_reports_connection_failure_as_request_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = NativeTransport::new()
        .unwrap()
        .post_login(&format!("http://{addr}/api/login/"), &LoginRequest::new("u", "p"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Request(_)));
}
