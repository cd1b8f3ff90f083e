//! Route definitions for the Credo HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new().merge(account_routes()).merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Account endpoints: register, login, and self-service.
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(handlers::account::create))
        .route("/accounts/login", post(handlers::account::login))
        .route("/accounts/me", get(handlers::account::me))
        .route("/accounts/me", put(handlers::account::update_me))
        .route("/accounts/me", delete(handlers::account::delete_me))
}

/// Health endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
