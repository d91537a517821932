//! Pure authorization decision functions.
//!
//! No I/O happens here: callers load the resource and the acting user,
//! then ask these functions for a decision. Each `ensure_*` variant
//! returns the denial reason shown verbatim to API consumers, so the
//! strings are part of the external contract.

pub mod document;
pub mod user;

use uuid::Uuid;

use dochub_entity::user::{Role, User};

pub use document::{
    can_mutate_document, can_view_document, ensure_can_delete_document,
    ensure_can_update_document, ensure_can_view_document,
};
pub use user::{can_mutate_user, ensure_can_delete_user, ensure_can_update_user};

/// The authenticated principal a decision is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// The acting user's id.
    pub id: Uuid,
    /// The acting user's current role (from the database, not the token).
    pub role: Role,
}

impl Actor {
    /// Builds an actor from a loaded user record.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }

    /// Whether the actor carries administrative privileges.
    pub fn is_privileged(&self) -> bool {
        self.role.is_privileged()
    }
}

/// Strict ownership check.
pub fn is_owner(resource_owner_id: Uuid, actor_id: Uuid) -> bool {
    resource_owner_id == actor_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_owner() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert!(is_owner(a, a));
        assert!(!is_owner(a, b));
    }

    #[test]
    fn test_privileged_actor() {
        let admin = Actor {
            id: Uuid::new_v4(),
            role: Role::Admin,
        };
        let user = Actor {
            id: Uuid::new_v4(),
            role: Role::User,
        };
        assert!(admin.is_privileged());
        assert!(!user.is_privileged());
    }
}
