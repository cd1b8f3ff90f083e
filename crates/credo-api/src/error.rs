//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use credo_core::error::{AppError, ErrorKind};
use credo_core::types::outcome::Outcome;

/// Wrapper carrying an [`AppError`] out of handlers and extractors.
///
/// The response body is always the `Outcome` envelope, so boundary failures
/// look the same on the wire as service-produced ones.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, message) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, err.message.clone()),
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, err.message.clone()),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, err.message.clone()),
            ErrorKind::Conflict => (StatusCode::CONFLICT, err.message.clone()),
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                // Internal diagnostics stay in the logs.
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(Outcome::<()>::failed(message))).into_response()
    }
}
