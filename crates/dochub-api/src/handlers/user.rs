//! User handlers — listing, lookup, updates, removal, owned documents.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use dochub_entity::user::Role;
use dochub_service::user::UpdateUserData;

use crate::error::ApiError;

use crate::dto::request::UpdateUserRequest;
use crate::dto::response::{DocumentListResponse, MessageResponse, UserListResponse, UserResponse};
use crate::extractors::{AuthUser, Pagination};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> Result<Json<UserListResponse>, ApiError> {
    let (users, meta_data) = state
        .user_service
        .list(auth.context(), pagination.limit, pagination.offset)
        .await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        meta_data,
    }))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get(id).await?;
    Ok(Json(user.into()))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let role = req.role.as_deref().map(Role::from_str).transpose()?;

    let user = state
        .user_service
        .update(
            auth.context(),
            id,
            UpdateUserData {
                email: req.email,
                username: req.username,
                firstname: req.firstname,
                lastname: req.lastname,
                password: req.password,
                role,
            },
        )
        .await?;

    Ok(Json(user.into()))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_service.delete(auth.context(), id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// GET /api/users/{id}/documents
pub async fn list_user_documents(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    pagination: Pagination,
) -> Result<Json<DocumentListResponse>, ApiError> {
    let (documents, meta_data) = state
        .user_service
        .documents_for_user(auth.context(), id, pagination.limit, pagination.offset)
        .await?;

    Ok(Json(DocumentListResponse {
        documents,
        meta_data,
    }))
}
