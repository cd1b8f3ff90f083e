//! Session context carrying the authenticated identity of a request.

use uuid::Uuid;

use credo_entity::user::User;

/// The authenticated identity attached to a request.
///
/// Resolved once at the boundary — token verified, subject looked up — and
/// passed explicitly into every service operation that requires an existing
/// session. Owned by the request; never shared across requests or read from
/// ambient state.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// The verified token's subject.
    pub user_id: Uuid,
    /// The user record the subject resolved to.
    pub user: User,
}

impl SessionContext {
    /// Creates a session context for a resolved user.
    pub fn new(user: User) -> Self {
        Self {
            user_id: user.id,
            user,
        }
    }
}
