//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Email address.
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// First name.
    #[validate(length(min = 1, message = "Firstname is required"))]
    pub firstname: String,
    /// Last name.
    #[validate(length(min = 1, message = "Lastname is required"))]
    pub lastname: String,
    /// Password. Minimum length is enforced by the auth service from
    /// configuration.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Signin request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token verification request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// The token to verify.
    #[serde(default)]
    pub token: String,
}

/// Create document request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    /// Document title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Document body.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Access tier: "public", "private", or "role".
    pub access: String,
}

/// Update document request body; omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateDocumentRequest {
    /// New title.
    pub title: Option<String>,
    /// New content.
    pub content: Option<String>,
    /// New access tier.
    pub access: Option<String>,
}

/// Update user request body; omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUserRequest {
    /// New email.
    pub email: Option<String>,
    /// New username.
    pub username: Option<String>,
    /// New first name.
    pub firstname: Option<String>,
    /// New last name.
    pub lastname: Option<String>,
    /// New password.
    pub password: Option<String>,
    /// New role; only a privileged actor may set this.
    pub role: Option<String>,
}

/// Search query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// The substring to search for.
    #[serde(default)]
    pub q: String,
}
