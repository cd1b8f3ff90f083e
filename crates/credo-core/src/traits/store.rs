//! Credential-store contract for user record persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// The credential store backing the account service.
///
/// Defined with a generic entity parameter so the trait stays free of
/// entity-crate dependencies; implementations bind it to the concrete user
/// record. The store must enforce a uniqueness constraint on email:
/// `insert` and `update_profile` report a duplicate as
/// [`ErrorKind::Conflict`](crate::error::ErrorKind::Conflict), which is the
/// only backstop for the window between an existence check and the
/// subsequent write.
#[async_trait]
pub trait UserStore<Entity>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
{
    /// Find a record by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Entity>>;

    /// Find a record by exact (byte-identical) email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Entity>>;

    /// Persist a new record and return the stored version.
    async fn insert(&self, user: &Entity) -> AppResult<Entity>;

    /// Update name and email on an existing record.
    async fn update_profile(&self, id: Uuid, name: &str, email: &str) -> AppResult<Entity>;

    /// Delete a record by primary key. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Count total records.
    async fn count(&self) -> AppResult<u64>;
}
