//! Signup, signin, and token verification.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use dochub_auth::jwt::{Claims, JwtDecoder, JwtEncoder};
use dochub_auth::password;
use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_database::repositories::user::UserRepository;
use dochub_entity::user::{CreateUser, Role, User};

/// The single message for both unknown-email and bad-password signin
/// failures. Existing clients depend on the exact wording.
const SIGNIN_FAILURE_MESSAGE: &str = "Username or Password incorrect";

/// Message for the fast-path uniqueness check on signup. Both fields
/// are named even when only one collides, matching the database
/// constraint mapping.
const UNIQUENESS_MESSAGE: &str = "username and email must be unique";

/// Data for registering a new account.
#[derive(Debug, Clone)]
pub struct SignupData {
    pub email: String,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
}

/// Credentials for signing in.
#[derive(Debug, Clone)]
pub struct SigninData {
    pub email: String,
    pub password: String,
}

/// A successfully authenticated session.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Handles account registration and token lifecycle.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<UserRepository>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
    password_min_length: usize,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<UserRepository>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        password_min_length: usize,
    ) -> Self {
        Self {
            users,
            encoder,
            decoder,
            password_min_length,
        }
    }

    /// Registers a new account and issues its first token.
    ///
    /// New accounts always start with the `User` role; role changes go
    /// through the privileged user-update path.
    pub async fn signup(&self, data: SignupData) -> AppResult<AuthSession> {
        if data.password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        // Fast path only; the unique constraints settle the race on insert.
        if self.users.find_by_email(&data.email).await?.is_some()
            || self.users.find_by_username(&data.username).await?.is_some()
        {
            return Err(AppError::conflict(UNIQUENESS_MESSAGE));
        }

        let password_hash = self.hash_on_blocking_pool(data.password).await?;

        let user = self
            .users
            .create(&CreateUser {
                email: data.email,
                username: data.username,
                firstname: data.firstname,
                lastname: data.lastname,
                password_hash,
                role: Role::User,
            })
            .await?;

        let (token, expires_at) = self.encoder.issue(user.id, &user.email, &user.username)?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(AuthSession {
            user,
            token,
            expires_at,
        })
    }

    /// Verifies credentials and issues a fresh token.
    pub async fn signin(&self, data: SigninData) -> AppResult<AuthSession> {
        let Some(user) = self.users.find_by_email(&data.email).await? else {
            warn!(email = %data.email, "Signin attempt for unknown email");
            return Err(AppError::unauthenticated(SIGNIN_FAILURE_MESSAGE));
        };

        let hash = user.password_hash.clone();
        let password = data.password;
        let valid = tokio::task::spawn_blocking(move || password::verify(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))??;

        if !valid {
            warn!(user_id = %user.id, "Signin attempt with bad password");
            return Err(AppError::unauthenticated(SIGNIN_FAILURE_MESSAGE));
        }

        let (token, expires_at) = self.encoder.issue(user.id, &user.email, &user.username)?;

        info!(user_id = %user.id, "User signed in");

        Ok(AuthSession {
            user,
            token,
            expires_at,
        })
    }

    /// Verifies a token's signature and expiry.
    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.decoder.verify(token)
    }

    /// Resolves verified claims to a live user record.
    ///
    /// Tokens are stateless, so the account behind one may have been
    /// renamed or re-created since issue. Resolution falls back from
    /// id to email to username before giving up.
    pub async fn resolve_user(&self, claims: &Claims) -> AppResult<User> {
        if let Some(user) = self.users.find_by_id(claims.user_id()).await? {
            return Ok(user);
        }
        if let Some(user) = self.users.find_by_email(&claims.email).await? {
            return Ok(user);
        }
        if let Some(user) = self.users.find_by_username(&claims.username).await? {
            return Ok(user);
        }

        Err(AppError::unauthenticated("Invalid token: unknown user"))
    }

    /// Hashes a password off the async runtime.
    ///
    /// Argon2 takes tens of milliseconds; running it inline would
    /// stall the worker thread.
    async fn hash_on_blocking_pool(&self, password: String) -> AppResult<String> {
        tokio::task::spawn_blocking(move || password::hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }
}
