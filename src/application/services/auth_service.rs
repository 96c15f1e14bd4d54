//! Identity and credential service: registration, login and bearer token checks.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Identity, NewUser, User, user::normalize_email};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::security::jwt::{JwtError, TokenSigner};
use crate::infrastructure::security::password::{self, PasswordError};

/// Well-formed Argon2id hash with the default cost parameters that no password
/// matches. Unknown-email logins verify against it so they cost the same as a
/// wrong password.
const UNKNOWN_USER_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// A user together with a freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Service for account registration, login and token verification.
///
/// Passwords are stored as Argon2id PHC strings. Tokens are HS256 JWTs whose
/// subject is the user id; the signing secret comes from configuration.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    signer: TokenSigner,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` - user repository for account lookups and inserts
    /// - `signer` - token signer holding the process-wide secret and token lifetime
    pub fn new(users: Arc<dyn UserRepository>, signer: TokenSigner) -> Self {
        Self { users, signer }
    }

    /// Registers a new account and issues its first token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] (`duplicate_identity`) if the email is
    /// already registered, whatever the password.
    ///
    /// Returns [`AppError::Internal`] on hashing, signing or storage errors.
    pub async fn register(&self, email: &str, raw_password: &str) -> Result<AuthSession, AppError> {
        let password_hash = hash_in_background(raw_password.to_string()).await?;

        let user = self
            .users
            .create(NewUser::new(email, password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        let token = self.issue_token(&user)?;
        Ok(AuthSession { user, token })
    }

    /// Checks credentials and issues a fresh token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] (`invalid_credentials`) both when the
    /// email is unknown and when the password does not match.
    ///
    /// Returns [`AppError::Internal`] on storage or signing errors.
    pub async fn login(&self, email: &str, raw_password: &str) -> Result<AuthSession, AppError> {
        let Some(user) = self.users.find_by_email(&normalize_email(email)).await? else {
            verify_in_background(raw_password.to_string(), UNKNOWN_USER_HASH.to_string()).await?;
            tracing::debug!("Login rejected: unknown email");
            return Err(AppError::invalid_credentials());
        };

        if !verify_in_background(raw_password.to_string(), user.password_hash.clone()).await? {
            tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AppError::invalid_credentials());
        }

        let token = self.issue_token(&user)?;
        Ok(AuthSession { user, token })
    }

    /// Resolves a bearer token to its user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with:
    /// - `missing_token` if `token` is `None`
    /// - `invalid_token` if the signature is bad, the token expired, or the
    ///   subject no longer exists
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn verify(&self, token: Option<&str>) -> Result<User, AppError> {
        let token = token.ok_or_else(AppError::missing_token)?;

        let claims = self.signer.verify(token).map_err(|e| match e {
            JwtError::Expired => AppError::invalid_token("Token has expired"),
            other => AppError::invalid_token(other.to_string()),
        })?;

        self.users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::invalid_token("User not found"))
    }

    /// Authentication gate for protected operations.
    ///
    /// # Errors
    ///
    /// Same as [`Self::verify`].
    pub async fn authenticate(&self, token: &str) -> Result<Identity, AppError> {
        let user = self.verify(Some(token)).await?;
        Ok(Identity::new(user.id))
    }

    /// Issues a token bound to `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        self.signer.issue(user.id).map_err(|e| {
            AppError::internal("Failed to issue token", json!({ "reason": e.to_string() }))
        })
    }
}

/// Argon2 is CPU-bound; keep it off the async workers.
async fn hash_in_background(raw_password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || password::hash_password(&raw_password))
        .await
        .map_err(|e| AppError::internal("Password task failed", json!({ "reason": e.to_string() })))?
        .map_err(password_error)
}

async fn verify_in_background(raw_password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || password::verify_password(&raw_password, &hash))
        .await
        .map_err(|e| AppError::internal("Password task failed", json!({ "reason": e.to_string() })))?
        .map_err(password_error)
}

fn password_error(e: PasswordError) -> AppError {
    AppError::internal("Password hashing failed", json!({ "reason": e.to_string() }))
}
