//! Document handlers — CRUD and listing.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use dochub_entity::document::{AccessTier, Document};
use dochub_service::document::{CreateDocumentData, UpdateDocumentData};

use crate::error::ApiError;

use crate::dto::request::{CreateDocumentRequest, UpdateDocumentRequest};
use crate::dto::response::{DocumentListResponse, MessageResponse};
use crate::dto::validate_request;
use crate::extractors::{AuthUser, Pagination};
use crate::state::AppState;

/// POST /api/documents
pub async fn create_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    validate_request(&req)?;
    let access = AccessTier::from_str(&req.access)?;

    let document = state
        .document_service
        .create(
            auth.context(),
            CreateDocumentData {
                title: req.title,
                content: req.content,
                access,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/documents
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> Result<Json<DocumentListResponse>, ApiError> {
    let (documents, meta_data) = state
        .document_service
        .list(auth.context(), pagination.limit, pagination.offset)
        .await?;

    Ok(Json(DocumentListResponse {
        documents,
        meta_data,
    }))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, ApiError> {
    let document = state.document_service.get(auth.context(), id).await?;
    Ok(Json(document))
}

/// PUT /api/documents/{id}
pub async fn update_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDocumentRequest>,
) -> Result<Json<Document>, ApiError> {
    let access = req.access.as_deref().map(AccessTier::from_str).transpose()?;

    let document = state
        .document_service
        .update(
            auth.context(),
            id,
            UpdateDocumentData {
                title: req.title,
                content: req.content,
                access,
            },
        )
        .await?;

    Ok(Json(document))
}

/// DELETE /api/documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.document_service.delete(auth.context(), id).await?;
    Ok(Json(MessageResponse::new("Document deleted successfully")))
}
