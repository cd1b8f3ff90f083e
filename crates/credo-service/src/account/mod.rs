//! Account lifecycle operations.

pub mod service;

pub use service::{AccountService, TokenData, UserData};
