//! The uniform result envelope returned by every account operation.

use serde::{Deserialize, Serialize};

/// Whether an operation succeeded or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeStatus {
    /// The operation completed successfully.
    #[serde(rename = "SUCCESS")]
    Success,
    /// The operation failed; `message` says why.
    #[serde(rename = "FAILED")]
    Failed,
}

/// The universal success/failure envelope for account operations.
///
/// Exactly one of SUCCESS/FAILED; a FAILED outcome never carries a token in
/// `data`. The `error_detail` field holds the underlying cause of a store
/// failure for server-side diagnostics only — it is never serialized, so it
/// cannot leak to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome<T> {
    /// SUCCESS or FAILED.
    pub status: OutcomeStatus,
    /// Human-readable result message.
    pub message: String,
    /// Payload on success (token, user record).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Opaque diagnostic, retained server-side only.
    #[serde(skip)]
    pub error_detail: Option<String>,
}

impl<T> Outcome<T> {
    /// A successful outcome carrying a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: OutcomeStatus::Success,
            message: message.into(),
            data: Some(data),
            error_detail: None,
        }
    }

    /// A successful outcome with no payload beyond the message.
    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Success,
            message: message.into(),
            data: None,
            error_detail: None,
        }
    }

    /// A failed outcome with a user-facing message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Failed,
            message: message.into(),
            data: None,
            error_detail: None,
        }
    }

    /// A failed outcome that additionally records the underlying cause for
    /// server-side diagnostics.
    pub fn failed_with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Failed,
            message: message.into(),
            data: None,
            error_detail: Some(detail.into()),
        }
    }

    /// Returns `true` if the outcome is SUCCESS.
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_status_and_data() {
        let outcome = Outcome::success("ok", serde_json::json!({"token": "abc"}));
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "SUCCESS");
        assert_eq!(value["data"]["token"], "abc");
    }

    #[test]
    fn failed_omits_data_field() {
        let outcome = Outcome::<()>::failed("nope");
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "FAILED");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn error_detail_never_reaches_the_wire() {
        let outcome = Outcome::<()>::failed_with_detail("Unable to create new user", "pg down");
        let value = serde_json::to_value(&outcome).unwrap();
        assert!(value.get("error_detail").is_none());
        assert_eq!(outcome.error_detail.as_deref(), Some("pg down"));
    }
}
