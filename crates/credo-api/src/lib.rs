//! # credo-api
//!
//! HTTP API layer for the Credo account service, built on Axum.
//!
//! Provides the REST endpoints, the bearer-token session extractor,
//! request logging middleware, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
