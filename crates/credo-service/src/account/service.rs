//! Account service — registration, login, and self-service operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use credo_auth::password::PasswordHasher;
use credo_auth::token::TokenIssuer;
use credo_core::error::ErrorKind;
use credo_core::result::AppResult;
use credo_core::traits::UserStore;
use credo_core::types::outcome::Outcome;
use credo_entity::user::{PublicUser, User};

use crate::context::SessionContext;
use crate::validate::{self, LengthViolation};

const MSG_FIELDS_REQUIRED: &str = "All fields are required";
const MSG_NAME_TOO_SHORT: &str = "Name must contain at least 3 characters.";
const MSG_NAME_TOO_LONG: &str = "Name must contain at most 30 characters.";
const MSG_INVALID_EMAIL: &str = "Invalid email address";
const MSG_PASSWORD_TOO_SHORT: &str = "Password must contain at least 6 characters.";
const MSG_PASSWORD_TOO_LONG: &str = "Password must contain at most 20 characters.";
const MSG_EMAIL_TAKEN: &str = "Already have account with this email.";
const MSG_EMAIL_TAKEN_BY_OTHER: &str =
    "Another user has an account with this email, try a different email.";
const MSG_BAD_CREDENTIALS: &str = "Email or Password incorrect";

/// Payload carrying a freshly issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenData {
    /// The signed bearer token.
    pub token: String,
}

/// Payload carrying the caller's own record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    /// The sanitized user record.
    pub user: PublicUser,
}

/// Orchestrates the account lifecycle.
///
/// Stateless: all durable state lives in the injected store, so the service
/// is cheap to clone and needs no locking. Every operation returns an
/// [`Outcome`]; no error escapes past an operation — store failures are
/// caught here, logged, and mapped to a fixed generic message with the
/// cause retained only in `error_detail`.
#[derive(Clone)]
pub struct AccountService {
    /// Credential store.
    store: Arc<dyn UserStore<User>>,
    /// Token issuer.
    issuer: Arc<TokenIssuer>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService")
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        store: Arc<dyn UserStore<User>>,
        issuer: Arc<TokenIssuer>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            store,
            issuer,
            hasher,
        }
    }

    /// Registers a new account and returns a bearer token for it.
    ///
    /// Check order is load-bearing: required fields, then name, email,
    /// password shape, then email uniqueness. The first failing check wins
    /// and decides the message.
    pub async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Outcome<TokenData> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Outcome::failed(MSG_FIELDS_REQUIRED);
        }

        let name = name.trim();
        let email = email.trim();
        let password = password.trim();

        if let Err(violation) = validate::validate_name(name) {
            return Outcome::failed(name_message(violation));
        }
        if !validate::validate_email(email) {
            return Outcome::failed(MSG_INVALID_EMAIL);
        }
        if let Err(violation) = validate::validate_password(password) {
            return Outcome::failed(password_message(violation));
        }

        match self.try_create(name, email, password).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, email, "Account creation failed");
                Outcome::failed_with_detail("Unable to create new user", err.to_string())
            }
        }
    }

    async fn try_create(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AppResult<Outcome<TokenData>> {
        if self.store.find_by_email(email).await?.is_some() {
            return Ok(Outcome::failed(MSG_EMAIL_TAKEN));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = User::new(name, email, password_hash);

        // A concurrent registration can slip between the check above and
        // this insert; the store's unique index turns that into a conflict.
        let created = match self.store.insert(&user).await {
            Ok(created) => created,
            Err(err) if err.kind == ErrorKind::Conflict => {
                return Ok(Outcome::failed(MSG_EMAIL_TAKEN));
            }
            Err(err) => return Err(err),
        };

        let token = self.issuer.issue(created.id)?;
        info!(user_id = %created.id, "New account created");

        Ok(Outcome::success(
            "New user created successfully.",
            TokenData { token },
        ))
    }

    /// Authenticates an email/password pair and returns a bearer token.
    ///
    /// An unknown email and a wrong password produce the identical failure
    /// outcome, so callers cannot probe which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> Outcome<TokenData> {
        if email.is_empty() || password.is_empty() {
            return Outcome::failed(MSG_FIELDS_REQUIRED);
        }

        let email = email.trim();
        let password = password.trim();

        if !validate::validate_email(email) {
            return Outcome::failed(MSG_INVALID_EMAIL);
        }
        if let Err(violation) = validate::validate_password(password) {
            return Outcome::failed(password_message(violation));
        }

        match self.try_login(email, password).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, email, "Login failed");
                Outcome::failed_with_detail("Unable to login", err.to_string())
            }
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> AppResult<Outcome<TokenData>> {
        let Some(user) = self.store.find_by_email(email).await? else {
            return Ok(Outcome::failed(MSG_BAD_CREDENTIALS));
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            return Ok(Outcome::failed(MSG_BAD_CREDENTIALS));
        }

        let token = self.issuer.issue(user.id)?;
        info!(user_id = %user.id, "User logged in");

        Ok(Outcome::success("Login successful.", TokenData { token }))
    }

    /// Returns the caller's own record, sans credential material.
    pub async fn get_self(&self, ctx: &SessionContext) -> Outcome<UserData> {
        Outcome::success(
            "User retrieved successfully.",
            UserData {
                user: ctx.user.to_public(),
            },
        )
    }

    /// Updates the caller's name and email.
    ///
    /// The uniqueness check runs even when the requested email matches the
    /// caller's current one — a no-op rename to one's own email succeeds.
    /// On any failure the caller's record is left untouched.
    pub async fn update_self(&self, ctx: &SessionContext, name: &str, email: &str) -> Outcome<()> {
        if name.is_empty() || email.is_empty() {
            return Outcome::failed(MSG_FIELDS_REQUIRED);
        }

        let name = name.trim();
        let email = email.trim();

        if let Err(violation) = validate::validate_name(name) {
            return Outcome::failed(name_message(violation));
        }
        if !validate::validate_email(email) {
            return Outcome::failed(MSG_INVALID_EMAIL);
        }

        match self.try_update(ctx, name, email).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, user_id = %ctx.user_id, "Profile update failed");
                Outcome::failed_with_detail("Unable to update user", err.to_string())
            }
        }
    }

    async fn try_update(
        &self,
        ctx: &SessionContext,
        name: &str,
        email: &str,
    ) -> AppResult<Outcome<()>> {
        if let Some(existing) = self.store.find_by_email(email).await? {
            if existing.id != ctx.user_id {
                return Ok(Outcome::failed(MSG_EMAIL_TAKEN_BY_OTHER));
            }
        }

        match self.store.update_profile(ctx.user_id, name, email).await {
            Ok(_) => {
                info!(user_id = %ctx.user_id, "Profile updated");
                Ok(Outcome::success_message("User updated successfully."))
            }
            Err(err) if err.kind == ErrorKind::Conflict => {
                Ok(Outcome::failed(MSG_EMAIL_TAKEN_BY_OTHER))
            }
            Err(err) => Err(err),
        }
    }

    /// Deletes the caller's record.
    ///
    /// Succeeds whether or not a row was actually removed: a subject deleted
    /// between token issuance and this call gets the same outcome.
    pub async fn delete_self(&self, ctx: &SessionContext) -> Outcome<()> {
        match self.store.delete(ctx.user_id).await {
            Ok(removed) => {
                info!(user_id = %ctx.user_id, removed, "Account deleted");
                Outcome::success_message("User deleted successfully.")
            }
            Err(err) => {
                error!(error = %err, user_id = %ctx.user_id, "Account deletion failed");
                Outcome::failed_with_detail("Unable to delete user", err.to_string())
            }
        }
    }
}

fn name_message(violation: LengthViolation) -> &'static str {
    match violation {
        LengthViolation::TooShort => MSG_NAME_TOO_SHORT,
        LengthViolation::TooLong => MSG_NAME_TOO_LONG,
    }
}

fn password_message(violation: LengthViolation) -> &'static str {
    match violation {
        LengthViolation::TooShort => MSG_PASSWORD_TOO_SHORT,
        LengthViolation::TooLong => MSG_PASSWORD_TOO_LONG,
    }
}
