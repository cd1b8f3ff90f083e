//! Integration tests for the account lifecycle.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn register_view_update_delete_flow() {
    let app = TestApp::new();

    let token = app.signup("flow@example.com").await;

    // View the freshly created record.
    let me = app
        .request("GET", "/api/accounts/me", None, Some(&token))
        .await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["status"], "SUCCESS");
    assert_eq!(me.body["data"]["user"]["email"], "flow@example.com");
    assert_eq!(me.body["data"]["user"]["name"], "Test Person");

    // Rename and change email.
    let update = app
        .request(
            "PUT",
            "/api/accounts/me",
            Some(serde_json::json!({
                "name": "Renamed Person",
                "email": "renamed@example.com",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);
    assert_eq!(update.body["status"], "SUCCESS");

    let me = app
        .request("GET", "/api/accounts/me", None, Some(&token))
        .await;
    assert_eq!(me.body["data"]["user"]["name"], "Renamed Person");
    assert_eq!(me.body["data"]["user"]["email"], "renamed@example.com");

    // Delete, then the token no longer resolves to a session.
    let delete = app
        .request("DELETE", "/api/accounts/me", None, Some(&token))
        .await;
    assert_eq!(delete.status, StatusCode::OK);
    assert_eq!(delete.body["status"], "SUCCESS");

    let me = app
        .request("GET", "/api/accounts/me", None, Some(&token))
        .await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn registration_response_never_contains_credentials() {
    let app = TestApp::new();
    let token = app.signup("nopass@example.com").await;

    let me = app
        .request("GET", "/api/accounts/me", None, Some(&token))
        .await;
    let user = &me.body["data"]["user"];
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_registration_is_rejected_with_the_conflict_message() {
    let app = TestApp::new();
    app.signup("dup@example.com").await;

    let response = app
        .create_account("Other Person", "dup@example.com", "password2")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "FAILED");
    assert_eq!(
        response.body["message"],
        "Already have account with this email."
    );
    assert!(response.body.get("data").is_none());
}

#[tokio::test]
async fn validation_errors_surface_in_declared_order() {
    let app = TestApp::new();

    // Everything is malformed; the name check fires first.
    let response = app.create_account("ab", "not-an-email", "x").await;
    assert_eq!(response.body["status"], "FAILED");
    assert_eq!(
        response.body["message"],
        "Name must contain at least 3 characters."
    );

    // Omitted fields hit the required-fields branch.
    let response = app
        .request(
            "POST",
            "/api/accounts",
            Some(serde_json::json!({"name": "Test Person"})),
            None,
        )
        .await;
    assert_eq!(response.body["message"], "All fields are required");
}

#[tokio::test]
async fn update_to_a_taken_email_is_rejected() {
    let app = TestApp::new();
    let token = app.signup("original@example.com").await;
    app.signup("taken@example.com").await;

    let response = app
        .request(
            "PUT",
            "/api/accounts/me",
            Some(serde_json::json!({
                "name": "Test Person",
                "email": "taken@example.com",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.body["status"], "FAILED");
    assert_eq!(
        response.body["message"],
        "Another user has an account with this email, try a different email."
    );
}

#[tokio::test]
async fn update_keeping_own_email_succeeds() {
    let app = TestApp::new();
    let token = app.signup("keep@example.com").await;

    let response = app
        .request(
            "PUT",
            "/api/accounts/me",
            Some(serde_json::json!({
                "name": "Still Me",
                "email": "keep@example.com",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.body["status"], "SUCCESS");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "SUCCESS");
    assert_eq!(response.body["data"]["service"], "credo");
}
