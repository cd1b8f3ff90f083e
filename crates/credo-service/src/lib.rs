//! # credo-service
//!
//! Business logic for the Credo account service. The [`AccountService`]
//! orchestrates the field validator, credential store, password hasher, and
//! token issuer to implement the account lifecycle.
//!
//! Services follow constructor injection — all dependencies are provided at
//! construction time via `Arc` references.

pub mod account;
pub mod context;
pub mod validate;

pub use account::{AccountService, TokenData, UserData};
pub use context::SessionContext;
