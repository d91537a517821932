//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dochub_auth::policy::Actor;
use dochub_database::repositories::document::Viewer;
use dochub_entity::user::{Role, User};

/// Context for the current authenticated request.
///
/// Extracted by middleware after token verification and passed into
/// service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The username (convenience field from the resolved user).
    pub username: String,
    /// The user's current role, as stored in the database.
    pub role: Role,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, username: String, role: Role) -> Self {
        Self {
            user_id,
            username,
            role,
        }
    }

    /// Builds a context from a freshly resolved user row.
    pub fn from_user(user: &User) -> Self {
        Self::new(user.id, user.username.clone(), user.role)
    }

    /// Returns whether the current user holds a privileged role.
    pub fn is_privileged(&self) -> bool {
        self.role.is_privileged()
    }

    /// The policy actor for this request.
    pub fn actor(&self) -> Actor {
        Actor {
            id: self.user_id,
            role: self.role,
        }
    }

    /// The visibility scope for document queries.
    ///
    /// Privileged users see everything, so they carry no scope.
    pub fn viewer(&self) -> Viewer {
        if self.is_privileged() {
            None
        } else {
            Some((self.user_id, self.role))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_viewer_is_unrestricted() {
        let ctx = RequestContext::new(Uuid::new_v4(), "admin".into(), Role::Admin);
        assert!(ctx.is_privileged());
        assert!(ctx.viewer().is_none());
    }

    #[test]
    fn test_regular_viewer_is_scoped() {
        let id = Uuid::new_v4();
        let ctx = RequestContext::new(id, "editor".into(), Role::Editor);
        assert_eq!(ctx.viewer(), Some((id, Role::Editor)));
    }
}
