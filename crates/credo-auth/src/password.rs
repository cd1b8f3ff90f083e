//! Argon2id password hashing and verification.
//!
//! Plaintext never reaches the store: registration hashes the password and
//! login compares through [`PasswordHasher::verify`].

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use credo_core::error::AppError;

/// Hashes and verifies passwords using Argon2id.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_its_own_input() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("hunter22").unwrap();
        assert!(hasher.verify("hunter22", &hash).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("hunter22").unwrap();
        assert!(!hasher.verify("hunter23", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("hunter22", "not-a-phc-string").is_err());
    }
}
