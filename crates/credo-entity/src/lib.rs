//! # credo-entity
//!
//! Domain entity models for the Credo account service.

pub mod user;

pub use user::{PublicUser, User};
