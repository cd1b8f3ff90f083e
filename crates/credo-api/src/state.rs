//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use credo_auth::token::TokenIssuer;
use credo_core::config::AppConfig;
use credo_core::traits::UserStore;
use credo_entity::user::User;
use credo_service::account::AccountService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Credential store, used by the session extractor to resolve subjects.
    pub store: Arc<dyn UserStore<User>>,
    /// Token issuer, used by the session extractor to verify tokens.
    pub token_issuer: Arc<TokenIssuer>,
    /// Account service.
    pub account_service: Arc<AccountService>,
}
