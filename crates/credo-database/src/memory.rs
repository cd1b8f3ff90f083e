//! In-memory user store.
//!
//! Implements the same contract as [`UserRepository`](crate::UserRepository),
//! including conflict reporting on duplicate emails, so service and API
//! tests can run without PostgreSQL.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use credo_core::error::AppError;
use credo_core::result::AppResult;
use credo_core::traits::UserStore;
use credo_entity::user::User;

/// A `UserStore` backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore<User> for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert(&self, user: &User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::conflict("Email already registered"));
        }
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn update_profile(&self, id: Uuid, name: &str, email: &str) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == email && u.id != id) {
            return Err(AppError::conflict("Email already registered"));
        }
        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.name = name.to_string();
        user.email = email.to_string();
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.users.write().await.remove(&id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credo_core::error::ErrorKind;

    #[tokio::test]
    async fn insert_rejects_duplicate_email() {
        let store = MemoryUserStore::new();
        store
            .insert(&User::new("First User", "dup@example.com", "hash-a"))
            .await
            .unwrap();

        let err = store
            .insert(&User::new("Second User", "dup@example.com", "hash-b"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn update_allows_keeping_own_email() {
        let store = MemoryUserStore::new();
        let user = store
            .insert(&User::new("Keeper", "keep@example.com", "hash"))
            .await
            .unwrap();

        let updated = store
            .update_profile(user.id, "Keeper Renamed", "keep@example.com")
            .await
            .unwrap();
        assert_eq!(updated.name, "Keeper Renamed");
        assert_eq!(updated.email, "keep@example.com");
    }

    #[tokio::test]
    async fn delete_is_idempotent_about_missing_rows() {
        let store = MemoryUserStore::new();
        let user = store
            .insert(&User::new("Gone Soon", "gone@example.com", "hash"))
            .await
            .unwrap();

        assert!(store.delete(user.id).await.unwrap());
        assert!(!store.delete(user.id).await.unwrap());
    }
}
