//! Account handlers — registration, login, and the authenticated
//! self-service operations.
//!
//! Handlers are thin: they unwrap the DTO, call the service, and serialize
//! the resulting `Outcome` verbatim with HTTP 200 — the envelope carries
//! success or failure. Only the session extractor produces non-200 statuses.

use axum::Json;
use axum::extract::State;

use credo_core::types::outcome::Outcome;
use credo_service::account::{TokenData, UserData};

use crate::dto::request::{CreateAccountRequest, LoginRequest, UpdateAccountRequest};
use crate::extractors::SessionUser;
use crate::state::AppState;

/// POST /api/accounts
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAccountRequest>,
) -> Json<Outcome<TokenData>> {
    let outcome = state
        .account_service
        .create_account(
            req.name.as_deref().unwrap_or(""),
            req.email.as_deref().unwrap_or(""),
            req.password.as_deref().unwrap_or(""),
        )
        .await;

    Json(outcome)
}

/// POST /api/accounts/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Json<Outcome<TokenData>> {
    let outcome = state
        .account_service
        .login(
            req.email.as_deref().unwrap_or(""),
            req.password.as_deref().unwrap_or(""),
        )
        .await;

    Json(outcome)
}

/// GET /api/accounts/me
pub async fn me(State(state): State<AppState>, session: SessionUser) -> Json<Outcome<UserData>> {
    Json(state.account_service.get_self(&session).await)
}

/// PUT /api/accounts/me
pub async fn update_me(
    State(state): State<AppState>,
    session: SessionUser,
    Json(req): Json<UpdateAccountRequest>,
) -> Json<Outcome<()>> {
    let outcome = state
        .account_service
        .update_self(
            &session,
            req.name.as_deref().unwrap_or(""),
            req.email.as_deref().unwrap_or(""),
        )
        .await;

    Json(outcome)
}

/// DELETE /api/accounts/me
pub async fn delete_me(State(state): State<AppState>, session: SessionUser) -> Json<Outcome<()>> {
    Json(state.account_service.delete_self(&session).await)
}
