//! Tower/Axum middleware.

pub mod logging;
