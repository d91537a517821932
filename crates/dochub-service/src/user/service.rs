//! User account operations — lookup, listing, updates, and removal.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use dochub_auth::password;
use dochub_auth::policy::{ensure_can_delete_user, ensure_can_update_user};
use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_core::types::pagination::PageMeta;
use dochub_database::repositories::document::DocumentRepository;
use dochub_database::repositories::user::UserRepository;
use dochub_entity::document::Document;
use dochub_entity::user::{Role, UpdateUser, User};

use crate::context::RequestContext;

/// Data for updating a user; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub email: Option<String>,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// Handles user account operations.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<UserRepository>,
    documents: Arc<DocumentRepository>,
    password_min_length: usize,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<UserRepository>,
        documents: Arc<DocumentRepository>,
        password_min_length: usize,
    ) -> Self {
        Self {
            users,
            documents,
            password_min_length,
        }
    }

    /// Fetches a single user. Any authenticated user may look up any other.
    pub async fn get(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Lists all users. Restricted to administrators.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        limit: u64,
        offset: u64,
    ) -> AppResult<(Vec<User>, PageMeta)> {
        if !ctx.is_privileged() {
            return Err(AppError::forbidden("Only administrators can list users"));
        }

        let users = self.users.find_all(limit, offset).await?;
        let total = self.users.count().await?;

        Ok((users, PageMeta::compute(limit, offset, total)))
    }

    /// Updates a user's fields.
    ///
    /// Allowed for the account owner and administrators; role changes
    /// additionally require a privileged actor.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateUserData,
    ) -> AppResult<User> {
        ensure_can_update_user(id, &ctx.actor())?;

        if data.role.is_some() && !ctx.is_privileged() {
            return Err(AppError::unauthorized(
                "You don't have permission to change user roles",
            ));
        }

        // 404 before any write when the target does not exist.
        self.get(id).await?;

        let password_hash = match data.password {
            Some(password) => {
                if password.len() < self.password_min_length {
                    return Err(AppError::validation(format!(
                        "Password must be at least {} characters",
                        self.password_min_length
                    )));
                }
                Some(
                    tokio::task::spawn_blocking(move || password::hash(&password))
                        .await
                        .map_err(|e| {
                            AppError::internal(format!("Password hashing task failed: {e}"))
                        })??,
                )
            }
            None => None,
        };

        let updated = self
            .users
            .update(
                id,
                &UpdateUser {
                    email: data.email,
                    username: data.username,
                    firstname: data.firstname,
                    lastname: data.lastname,
                    password_hash,
                    role: data.role,
                },
            )
            .await?;

        info!(user_id = %id, actor_id = %ctx.user_id, "User updated");

        Ok(updated)
    }

    /// Deletes a user account. Allowed for the owner and administrators.
    ///
    /// The user's documents go with the account via the foreign key
    /// cascade.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ensure_can_delete_user(id, &ctx.actor())?;

        if !self.users.delete(id).await? {
            return Err(AppError::not_found(format!("User {id} not found")));
        }

        info!(user_id = %id, actor_id = %ctx.user_id, "User deleted");

        Ok(())
    }

    /// Lists a user's documents that the current user may see.
    pub async fn documents_for_user(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        limit: u64,
        offset: u64,
    ) -> AppResult<(Vec<Document>, PageMeta)> {
        // 404 for a missing owner rather than an empty page.
        self.get(user_id).await?;

        let viewer = ctx.viewer();
        let documents = self
            .documents
            .find_by_owner_visible(user_id, viewer, limit, offset)
            .await?;
        let total = self
            .documents
            .count_by_owner_visible(user_id, viewer)
            .await?;

        Ok((documents, PageMeta::compute(limit, offset, total)))
    }
}
