//! Document repository implementation.
//!
//! Listing queries push the per-row visibility predicate into SQL so a
//! page of results is filtered and counted in the database. The
//! predicate mirrors `dochub_auth::policy::can_view_document`: public,
//! owned by the viewer, or role-scoped with a matching role. Privileged
//! viewers skip the predicate entirely.

use sqlx::PgPool;
use uuid::Uuid;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_entity::document::{CreateDocument, Document, UpdateDocument};
use dochub_entity::user::Role;

/// The message returned on a duplicate document title.
const TITLE_CONFLICT_MESSAGE: &str = "title must be unique";

/// Visibility scope for document queries.
///
/// `None` means unrestricted (a privileged viewer); `Some` restricts
/// rows to what that user may see.
pub type Viewer = Option<(Uuid, Role)>;

/// Repository for document CRUD and query operations.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a document by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find document by id", e)
            })
    }

    /// Find a document by its unique title.
    pub async fn find_by_title(&self, title: &str) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE title = $1")
            .bind(title)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find document by title", e)
            })
    }

    /// List documents visible to the viewer, newest first.
    pub async fn find_visible(
        &self,
        viewer: Viewer,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<Document>> {
        let query = match viewer {
            None => sqlx::query_as::<_, Document>(
                "SELECT * FROM documents ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            )
            .bind(limit as i64)
            .bind(offset as i64),
            Some((user_id, role)) => sqlx::query_as::<_, Document>(
                "SELECT * FROM documents \
                 WHERE (access = 'public' OR user_id = $1 OR (access = 'role' AND role = $2)) \
                 ORDER BY created_at DESC LIMIT $3 OFFSET $4",
            )
            .bind(user_id)
            .bind(role)
            .bind(limit as i64)
            .bind(offset as i64),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }

    /// Count documents visible to the viewer.
    pub async fn count_visible(&self, viewer: Viewer) -> AppResult<u64> {
        let count: i64 = match viewer {
            None => sqlx::query_scalar("SELECT COUNT(*) FROM documents")
                .fetch_one(&self.pool)
                .await,
            Some((user_id, role)) => sqlx::query_scalar(
                "SELECT COUNT(*) FROM documents \
                 WHERE (access = 'public' OR user_id = $1 OR (access = 'role' AND role = $2))",
            )
            .bind(user_id)
            .bind(role)
            .fetch_one(&self.pool)
            .await,
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count documents", e))?;
        Ok(count as u64)
    }

    /// List a user's documents that are visible to the viewer.
    pub async fn find_by_owner_visible(
        &self,
        owner_id: Uuid,
        viewer: Viewer,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<Document>> {
        let query = match viewer {
            None => sqlx::query_as::<_, Document>(
                "SELECT * FROM documents WHERE user_id = $1 \
                 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            )
            .bind(owner_id)
            .bind(limit as i64)
            .bind(offset as i64),
            Some((user_id, role)) => sqlx::query_as::<_, Document>(
                "SELECT * FROM documents WHERE user_id = $1 \
                 AND (access = 'public' OR user_id = $2 OR (access = 'role' AND role = $3)) \
                 ORDER BY created_at DESC LIMIT $4 OFFSET $5",
            )
            .bind(owner_id)
            .bind(user_id)
            .bind(role)
            .bind(limit as i64)
            .bind(offset as i64),
        };

        query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list documents by owner", e)
        })
    }

    /// Count a user's documents that are visible to the viewer.
    pub async fn count_by_owner_visible(&self, owner_id: Uuid, viewer: Viewer) -> AppResult<u64> {
        let count: i64 = match viewer {
            None => sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE user_id = $1")
                .bind(owner_id)
                .fetch_one(&self.pool)
                .await,
            Some((user_id, role)) => sqlx::query_scalar(
                "SELECT COUNT(*) FROM documents WHERE user_id = $1 \
                 AND (access = 'public' OR user_id = $2 OR (access = 'role' AND role = $3))",
            )
            .bind(owner_id)
            .bind(user_id)
            .bind(role)
            .fetch_one(&self.pool)
            .await,
        }
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count documents by owner", e)
        })?;
        Ok(count as u64)
    }

    /// Substring search over titles, restricted to visible documents.
    pub async fn search_visible(
        &self,
        query_text: &str,
        viewer: Viewer,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<Document>> {
        let pattern = format!("%{query_text}%");
        let query = match viewer {
            None => sqlx::query_as::<_, Document>(
                "SELECT * FROM documents WHERE title ILIKE $1 \
                 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            )
            .bind(pattern)
            .bind(limit as i64)
            .bind(offset as i64),
            Some((user_id, role)) => sqlx::query_as::<_, Document>(
                "SELECT * FROM documents WHERE title ILIKE $1 \
                 AND (access = 'public' OR user_id = $2 OR (access = 'role' AND role = $3)) \
                 ORDER BY created_at DESC LIMIT $4 OFFSET $5",
            )
            .bind(pattern)
            .bind(user_id)
            .bind(role)
            .bind(limit as i64)
            .bind(offset as i64),
        };

        query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to search documents", e)
        })
    }

    /// Count search matches restricted to visible documents.
    pub async fn count_search_visible(&self, query_text: &str, viewer: Viewer) -> AppResult<u64> {
        let pattern = format!("%{query_text}%");
        let count: i64 = match viewer {
            None => sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE title ILIKE $1")
                .bind(pattern)
                .fetch_one(&self.pool)
                .await,
            Some((user_id, role)) => sqlx::query_scalar(
                "SELECT COUNT(*) FROM documents WHERE title ILIKE $1 \
                 AND (access = 'public' OR user_id = $2 OR (access = 'role' AND role = $3))",
            )
            .bind(pattern)
            .bind(user_id)
            .bind(role)
            .fetch_one(&self.pool)
            .await,
        }
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count search results", e)
        })?;
        Ok(count as u64)
    }

    /// Create a new document.
    ///
    /// The unique constraint on title is the authoritative conflict
    /// signal; pre-checks are a fast path only.
    pub async fn create(&self, data: &CreateDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "INSERT INTO documents (title, content, author, access, user_id, role) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.author)
        .bind(data.access)
        .bind(data.user_id)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(map_title_violation)
    }

    /// Update a document's fields; `None` fields are left unchanged.
    pub async fn update(&self, id: Uuid, data: &UpdateDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "UPDATE documents SET title = COALESCE($2, title), \
                                  content = COALESCE($3, content), \
                                  access = COALESCE($4, access), \
                                  updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.access)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_title_violation)?
        .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    /// Delete a document by ID. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete document", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

/// Map a unique-constraint violation on the title to the contract message.
fn map_title_violation(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("documents_title_key") => {
            AppError::conflict(TITLE_CONFLICT_MESSAGE)
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to write document", e),
    }
}
