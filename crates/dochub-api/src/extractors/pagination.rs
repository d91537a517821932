//! Pagination query parameter extractor.
//!
//! Parameters are taken as raw strings so that non-numeric input is
//! rejected with the contract message instead of a generic
//! deserialization error.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use dochub_core::error::AppError;
use dochub_core::types::pagination::ListQuery;

use crate::error::ApiError;

/// Validated `limit`/`offset` query parameters.
#[derive(Debug, Clone)]
pub struct Pagination(pub ListQuery);

impl std::ops::Deref for Pagination {
    type Target = ListQuery;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<HashMap<String, String>> = Query::try_from_uri(&parts.uri)
            .map_err(|_| AppError::validation("Invalid query string"))?;

        let query = ListQuery::parse(
            params.get("limit").map(String::as_str),
            params.get("offset").map(String::as_str),
        )?;

        Ok(Pagination(query))
    }
}
