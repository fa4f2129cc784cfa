//! Tests for the authentication flow.
//!
//! Covers the login request body, token extraction, the token-less success
//! case, and the non-success status path.

use hwfetch::auth::Session;
use hwfetch::error::Error;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_authenticate_returns_token() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let session = Session::authenticate(&test_client(), &server.uri(), &test_credentials())
        .await
        .unwrap();

    assert_eq!(session.token(), Some(TEST_TOKEN));
    assert_eq!(session.bearer(), format!("Bearer {TEST_TOKEN}"));
}

#[tokio::test]
async fn test_authenticate_sends_wire_format_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "application_key": "test-app-key",
            "id_city": "null",
            "password": "test-password",
            "username": "test-user",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "t" })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::authenticate(&test_client(), &server.uri(), &test_credentials())
        .await
        .unwrap();
    assert_eq!(session.token(), Some("t"));
}

#[tokio::test]
async fn test_authenticate_without_token_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": 42 })))
        .mount(&server)
        .await;

    // A 2xx login without an access_token is not a local error; the session
    // simply has no token and renders a null bearer.
    let session = Session::authenticate(&test_client(), &server.uri(), &test_credentials())
        .await
        .unwrap();
    assert_eq!(session.token(), None);
    assert_eq!(session.bearer(), "Bearer null");
}

#[tokio::test]
async fn test_authenticate_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = Session::authenticate(&test_client(), &server.uri(), &test_credentials())
        .await
        .unwrap_err();

    match err {
        Error::Authentication(status) => assert_eq!(status, StatusCode::UNAUTHORIZED),
        other => panic!("expected Authentication error, got {other:?}"),
    }

    // No retry, no follow-up call: the expect(1) above is verified on drop.
}
