//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::Role;

use super::access::AccessTier;

/// A text document owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: Uuid,
    /// Globally unique title.
    pub title: String,
    /// Document body.
    pub content: String,
    /// Denormalized display name of the author at creation time.
    pub author: String,
    /// Visibility class.
    pub access: AccessTier,
    /// Owning user.
    pub user_id: Uuid,
    /// The creator's role at creation time; scopes `AccessTier::Role`
    /// documents even if the creator's role changes later.
    pub role: Role,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Title (must be unique).
    pub title: String,
    /// Body.
    pub content: String,
    /// Denormalized author display name.
    pub author: String,
    /// Visibility class.
    pub access: AccessTier,
    /// Owning user.
    pub user_id: Uuid,
    /// Creator's role at creation time.
    pub role: Role,
}

/// Data for updating an existing document.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocument {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New visibility class.
    pub access: Option<AccessTier>,
}
