//! Substring search over users and documents.

use std::sync::Arc;

use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_core::types::pagination::PageMeta;
use dochub_database::repositories::document::DocumentRepository;
use dochub_database::repositories::user::UserRepository;
use dochub_entity::document::Document;
use dochub_entity::user::User;

use crate::context::RequestContext;

/// Message returned when the search query is missing or empty.
const EMPTY_QUERY_MESSAGE: &str = "Query param is required";

/// Handles substring search across users and documents.
#[derive(Debug, Clone)]
pub struct SearchService {
    users: Arc<UserRepository>,
    documents: Arc<DocumentRepository>,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(users: Arc<UserRepository>, documents: Arc<DocumentRepository>) -> Self {
        Self { users, documents }
    }

    /// Searches users by username, names, or email.
    pub async fn search_users(
        &self,
        query: &str,
        limit: u64,
        offset: u64,
    ) -> AppResult<(Vec<User>, PageMeta)> {
        let query = validated_query(query)?;

        let users = self.users.search(query, limit, offset).await?;
        let total = self.users.count_search(query).await?;

        Ok((users, PageMeta::compute(limit, offset, total)))
    }

    /// Searches document titles, restricted to what the user may see.
    pub async fn search_documents(
        &self,
        ctx: &RequestContext,
        query: &str,
        limit: u64,
        offset: u64,
    ) -> AppResult<(Vec<Document>, PageMeta)> {
        let query = validated_query(query)?;
        let viewer = ctx.viewer();

        let documents = self
            .documents
            .search_visible(query, viewer, limit, offset)
            .await?;
        let total = self.documents.count_search_visible(query, viewer).await?;

        Ok((documents, PageMeta::compute(limit, offset, total)))
    }
}

/// Rejects missing or blank queries.
fn validated_query(query: &str) -> AppResult<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(EMPTY_QUERY_MESSAGE));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_rejected() {
        let err = validated_query("   ").unwrap_err();
        assert_eq!(err.message, EMPTY_QUERY_MESSAGE);
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(validated_query("  alice ").unwrap(), "alice");
    }
}
