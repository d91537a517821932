//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! verifies it, and resolves the live user record.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use dochub_core::error::AppError;
use dochub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))?;

        let claims = state.auth_service.verify_token(token)?;

        // Role comes from the database, not the token, so role changes
        // take effect without re-issuing tokens.
        let user = state.auth_service.resolve_user(&claims).await?;

        Ok(AuthUser(RequestContext::from_user(&user)))
    }
}
