//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing configuration.
///
/// The signing secret is loaded once at startup and injected into the token
/// issuer; business logic never reads it from ambient process state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
    /// Bearer token lifetime in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
            token_ttl_days: default_token_ttl_days(),
        }
    }
}

fn default_token_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl_days() -> u64 {
    3
}
