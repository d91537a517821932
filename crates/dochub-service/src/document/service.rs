//! Document CRUD with per-request authorization.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use dochub_auth::policy::{
    ensure_can_delete_document, ensure_can_update_document, ensure_can_view_document,
};
use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_core::types::pagination::PageMeta;
use dochub_database::repositories::document::DocumentRepository;
use dochub_database::repositories::user::UserRepository;
use dochub_entity::document::{AccessTier, CreateDocument, Document, UpdateDocument};

use crate::context::RequestContext;

/// Message for the fast-path title uniqueness check on create.
const TITLE_CONFLICT_MESSAGE: &str = "title must be unique";

/// Data for creating a document.
#[derive(Debug, Clone)]
pub struct CreateDocumentData {
    pub title: String,
    pub content: String,
    pub access: AccessTier,
}

/// Data for updating a document; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDocumentData {
    pub title: Option<String>,
    pub content: Option<String>,
    pub access: Option<AccessTier>,
}

/// Handles document creation, retrieval, and mutation.
#[derive(Debug, Clone)]
pub struct DocumentService {
    documents: Arc<DocumentRepository>,
    users: Arc<UserRepository>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(documents: Arc<DocumentRepository>, users: Arc<UserRepository>) -> Self {
        Self { documents, users }
    }

    /// Creates a document owned by the current user.
    ///
    /// The author display name and the creator's role are captured at
    /// creation time; later profile or role changes do not rewrite
    /// existing documents.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateDocumentData,
    ) -> AppResult<Document> {
        let user = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Invalid token: unknown user"))?;

        // Fast path only; the unique constraint settles the race on insert.
        if self.documents.find_by_title(&data.title).await?.is_some() {
            return Err(AppError::conflict(TITLE_CONFLICT_MESSAGE));
        }

        let document = self
            .documents
            .create(&CreateDocument {
                title: data.title,
                content: data.content,
                author: user.display_name(),
                access: data.access,
                user_id: user.id,
                role: user.role,
            })
            .await?;

        info!(document_id = %document.id, user_id = %user.id, "Document created");

        Ok(document)
    }

    /// Fetches a single document, enforcing the visibility policy.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Document> {
        let document = self
            .documents
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))?;

        ensure_can_view_document(&document, &ctx.actor())?;

        Ok(document)
    }

    /// Lists documents visible to the current user, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        limit: u64,
        offset: u64,
    ) -> AppResult<(Vec<Document>, PageMeta)> {
        let viewer = ctx.viewer();
        let documents = self.documents.find_visible(viewer, limit, offset).await?;
        let total = self.documents.count_visible(viewer).await?;

        Ok((documents, PageMeta::compute(limit, offset, total)))
    }

    /// Updates a document's fields after an ownership check.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateDocumentData,
    ) -> AppResult<Document> {
        let document = self
            .documents
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))?;

        ensure_can_update_document(&document, &ctx.actor())?;

        let updated = self
            .documents
            .update(
                id,
                &UpdateDocument {
                    title: data.title,
                    content: data.content,
                    access: data.access,
                },
            )
            .await?;

        info!(document_id = %id, user_id = %ctx.user_id, "Document updated");

        Ok(updated)
    }

    /// Deletes a document after an ownership check.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let document = self
            .documents
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))?;

        ensure_can_delete_document(&document, &ctx.actor())?;

        self.documents.delete(id).await?;

        info!(document_id = %id, user_id = %ctx.user_id, "Document deleted");

        Ok(())
    }
}
