//! Shared response types.

pub mod outcome;

pub use outcome::{Outcome, OutcomeStatus};
