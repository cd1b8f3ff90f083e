//! # credo-auth
//!
//! Credential primitives for the Credo account service.
//!
//! ## Modules
//!
//! - `token` — signed, time-limited bearer token issuance and verification
//! - `password` — Argon2id password hashing and verification

pub mod password;
pub mod token;

pub use password::PasswordHasher;
pub use token::{Claims, TokenIssuer};
