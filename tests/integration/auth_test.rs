//! Integration tests for the authentication boundary.

use axum::http::StatusCode;
use chrono::{Duration, Utc};

use credo_core::traits::UserStore;

use crate::helpers::TestApp;

#[tokio::test]
async fn login_returns_a_working_token() {
    let app = TestApp::new();
    app.signup("login@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/accounts/login",
            Some(serde_json::json!({
                "email": "login@example.com",
                "password": "password1",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "SUCCESS");

    let token = response.body["data"]["token"].as_str().unwrap();
    let me = app
        .request("GET", "/api/accounts/me", None, Some(token))
        .await;
    assert_eq!(me.body["data"]["user"]["email"], "login@example.com");
}

#[tokio::test]
async fn login_failures_are_indistinguishable_over_the_wire() {
    let app = TestApp::new();
    app.signup("known@example.com").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/accounts/login",
            Some(serde_json::json!({
                "email": "known@example.com",
                "password": "wrong-pass",
            })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/accounts/login",
            Some(serde_json::json!({
                "email": "unknown@example.com",
                "password": "password1",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::OK);
    assert_eq!(unknown_email.status, StatusCode::OK);
    assert_eq!(wrong_password.body["status"], "FAILED");
    assert_eq!(wrong_password.body["message"], unknown_email.body["message"]);
    assert_eq!(wrong_password.body["message"], "Email or Password incorrect");
}

#[tokio::test]
async fn missing_token_short_circuits_with_unauthorized() {
    let app = TestApp::new();

    for (method, path) in [
        ("GET", "/api/accounts/me"),
        ("PUT", "/api/accounts/me"),
        ("DELETE", "/api/accounts/me"),
    ] {
        let body = (method == "PUT")
            .then(|| serde_json::json!({"name": "Test Person", "email": "x@example.com"}));
        let response = app.request(method, path, body, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(response.body["status"], "FAILED");
        assert_eq!(response.body["message"], "Unauthorized");
    }
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/api/accounts/me", None, Some("not-a-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Unauthorized");
}

#[tokio::test]
async fn expired_token_is_unauthorized() {
    let app = TestApp::new();
    app.signup("expired@example.com").await;

    let user = app
        .store
        .find_by_email("expired@example.com")
        .await
        .unwrap()
        .unwrap();

    // Issued four days ago with a three-day TTL: past expiry.
    let stale = app
        .token_issuer
        .issue_at(user.id, Utc::now() - Duration::days(4))
        .unwrap();

    let response = app
        .request("GET", "/api/accounts/me", None, Some(&stale))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Unauthorized");
}

#[tokio::test]
async fn token_issued_two_days_ago_still_works() {
    let app = TestApp::new();
    app.signup("midlife@example.com").await;

    let user = app
        .store
        .find_by_email("midlife@example.com")
        .await
        .unwrap()
        .unwrap();

    let token = app
        .token_issuer
        .issue_at(user.id, Utc::now() - Duration::days(2))
        .unwrap();

    let response = app
        .request("GET", "/api/accounts/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["user"]["email"], "midlife@example.com");
}

#[tokio::test]
async fn token_for_a_deleted_subject_is_unauthorized() {
    let app = TestApp::new();
    let token = app.signup("ghost@example.com").await;

    let user = app
        .store
        .find_by_email("ghost@example.com")
        .await
        .unwrap()
        .unwrap();
    app.store.delete(user.id).await.unwrap();

    let response = app
        .request("GET", "/api/accounts/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Unauthorized");
}
