//! # credo-core
//!
//! Core crate for the Credo account service. Contains the unified error
//! system, the `Outcome` response envelope, configuration schemas, and the
//! credential-store trait implemented by the database crate.
//!
//! This crate has **no** internal dependencies on other Credo crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use types::outcome::Outcome;
