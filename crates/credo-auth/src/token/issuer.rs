//! Token issuance and verification with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use credo_core::config::auth::AuthConfig;
use credo_core::error::AppError;

use super::claims::Claims;

/// Mints and verifies signed, time-limited bearer tokens.
///
/// The signing secret is injected at construction; expired and tampered
/// tokens both surface as authentication failures, with distinct messages
/// retained for diagnostics.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Token lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds of clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation,
            ttl: Duration::days(config.token_ttl_days as i64),
        }
    }

    /// Issues a token for the given subject, expiring one TTL from now.
    pub fn issue(&self, subject: Uuid) -> Result<String, AppError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issues a token with an explicit issue time.
    ///
    /// Expiry is always `issued_at + ttl`; back-dating the issue time is how
    /// tests exercise mid-life and past-expiry verification.
    pub fn issue_at(&self, subject: Uuid, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            sub: subject,
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Verifies signature and expiry, returning the subject id.
    ///
    /// Every failure mode is `ErrorKind::Authentication`; the caller treats
    /// them identically while the message distinguishes them for logs.
    pub fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims.sub)
    }
}
