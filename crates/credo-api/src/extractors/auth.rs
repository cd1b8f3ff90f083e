//! `SessionUser` extractor — verifies the bearer token and resolves the
//! session context before any handler logic runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::warn;

use credo_core::error::AppError;
use credo_service::context::SessionContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The resolved session context available to authenticated handlers.
///
/// Resolution happens once per request: verify the token via the issuer,
/// then look the subject up in the store. A missing header, a bad or
/// expired token, and a subject deleted after issuance all produce the same
/// "Unauthorized" outcome — the distinction lives only in the logs.
#[derive(Debug, Clone)]
pub struct SessionUser(pub SessionContext);

impl std::ops::Deref for SessionUser {
    type Target = SessionContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                warn!("Missing Authorization header");
                unauthorized()
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Malformed Authorization header");
            unauthorized()
        })?;

        let subject = state.token_issuer.verify(token).map_err(|e| {
            warn!(error = %e, "Token verification failed");
            unauthorized()
        })?;

        let user = state
            .store
            .find_by_id(subject)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| {
                warn!(%subject, "Token subject no longer exists");
                unauthorized()
            })?;

        Ok(SessionUser(SessionContext::new(user)))
    }
}

fn unauthorized() -> ApiError {
    ApiError(AppError::authentication("Unauthorized"))
}
