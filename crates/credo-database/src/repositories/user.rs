//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use credo_core::error::{AppError, ErrorKind};
use credo_core::result::AppResult;
use credo_core::traits::UserStore;
use credo_entity::user::User;

/// Name of the unique index guarding email uniqueness.
const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Repository for user CRUD and lookup operations.
///
/// Email lookups are byte-exact: the service trims input before it gets
/// here, and two emails differing in case are distinct records.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_write_error(e: sqlx::Error, action: &str) -> AppError {
        match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
            {
                AppError::conflict("Email already registered")
            }
            _ => AppError::with_source(ErrorKind::Database, format!("Failed to {action}"), e),
        }
    }
}

#[async_trait]
impl UserStore<User> for UserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn insert(&self, user: &User) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, password_hash, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, "create user"))
    }

    async fn update_profile(&self, id: Uuid, name: &str, email: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, email = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, "update user"))?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
        Ok(count as u64)
    }
}
