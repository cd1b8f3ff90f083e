//! Health check handler.

use axum::Json;
use serde::{Deserialize, Serialize};

use credo_core::types::outcome::Outcome;

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthData {
    /// Service name.
    pub service: String,
    /// Crate version.
    pub version: String,
}

/// GET /api/health
pub async fn health() -> Json<Outcome<HealthData>> {
    Json(Outcome::success(
        "ok",
        HealthData {
            service: "credo".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    ))
}
