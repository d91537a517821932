//! Search handlers — substring search over users and documents.

use axum::Json;
use axum::extract::{Query, State};

use crate::dto::request::SearchParams;
use crate::dto::response::{DocumentListResponse, UserListResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, Pagination};
use crate::state::AppState;

/// GET /api/search/users?q=
pub async fn search_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    pagination: Pagination,
    Query(params): Query<SearchParams>,
) -> Result<Json<UserListResponse>, ApiError> {
    let (users, meta_data) = state
        .search_service
        .search_users(&params.q, pagination.limit, pagination.offset)
        .await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        meta_data,
    }))
}

/// GET /api/search/documents?q=
pub async fn search_documents(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
    Query(params): Query<SearchParams>,
) -> Result<Json<DocumentListResponse>, ApiError> {
    let (documents, meta_data) = state
        .search_service
        .search_documents(
            auth.context(),
            &params.q,
            pagination.limit,
            pagination.offset,
        )
        .await?;

    Ok(Json(DocumentListResponse {
        documents,
        meta_data,
    }))
}
