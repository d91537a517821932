//! Document visibility and mutation decisions.

use dochub_core::error::AppError;
use dochub_entity::document::{AccessTier, Document};

use super::{Actor, is_owner};

/// Whether the actor may read the document.
///
/// Allowed when the document is public, the actor owns it, the document
/// is role-scoped and the actor shares the creator's role, or the actor
/// is privileged.
pub fn can_view_document(document: &Document, actor: &Actor) -> bool {
    document.access == AccessTier::Public
        || is_owner(document.user_id, actor.id)
        || (document.access == AccessTier::Role && document.role == actor.role)
        || actor.is_privileged()
}

/// Whether the actor may update or delete the document.
///
/// Only the owner and privileged actors may mutate.
pub fn can_mutate_document(document: &Document, actor: &Actor) -> bool {
    is_owner(document.user_id, actor.id) || actor.is_privileged()
}

/// Denies with the read-permission reason unless [`can_view_document`].
pub fn ensure_can_view_document(document: &Document, actor: &Actor) -> Result<(), AppError> {
    if can_view_document(document, actor) {
        Ok(())
    } else {
        Err(AppError::unauthorized(
            "You don't have permission to view this document",
        ))
    }
}

/// Denies with the update-permission reason unless [`can_mutate_document`].
pub fn ensure_can_update_document(document: &Document, actor: &Actor) -> Result<(), AppError> {
    if can_mutate_document(document, actor) {
        Ok(())
    } else {
        Err(AppError::unauthorized(
            "You don't have permission to update this document",
        ))
    }
}

/// Denies with the delete-permission reason unless [`can_mutate_document`].
pub fn ensure_can_delete_document(document: &Document, actor: &Actor) -> Result<(), AppError> {
    if can_mutate_document(document, actor) {
        Ok(())
    } else {
        Err(AppError::unauthorized(
            "You don't have permission to delete this document",
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use dochub_entity::user::Role;

    use super::*;

    fn doc(access: AccessTier, owner: Uuid, role: Role) -> Document {
        Document {
            id: Uuid::new_v4(),
            title: "Quarterly report".to_string(),
            content: "numbers".to_string(),
            author: "Ada Lovelace".to_string(),
            access,
            user_id: owner,
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn actor(role: Role) -> Actor {
        Actor {
            id: Uuid::new_v4(),
            role,
        }
    }

    #[test]
    fn test_public_documents_visible_to_everyone() {
        let d = doc(AccessTier::Public, Uuid::new_v4(), Role::Editor);
        for role in Role::all() {
            assert!(can_view_document(&d, &actor(role)));
        }
    }

    #[test]
    fn test_private_document_hidden_from_strangers() {
        let d = doc(AccessTier::Private, Uuid::new_v4(), Role::User);
        assert!(!can_view_document(&d, &actor(Role::User)));
        assert!(!can_view_document(&d, &actor(Role::Editor)));
    }

    #[test]
    fn test_private_document_visible_to_owner() {
        let me = actor(Role::User);
        let d = doc(AccessTier::Private, me.id, Role::User);
        assert!(can_view_document(&d, &me));
    }

    #[test]
    fn test_private_document_visible_to_admin() {
        let d = doc(AccessTier::Private, Uuid::new_v4(), Role::User);
        assert!(can_view_document(&d, &actor(Role::Admin)));
    }

    #[test]
    fn test_role_document_requires_matching_role() {
        let d = doc(AccessTier::Role, Uuid::new_v4(), Role::Editor);
        assert!(can_view_document(&d, &actor(Role::Editor)));
        assert!(!can_view_document(&d, &actor(Role::Publisher)));
        // Admin override still applies.
        assert!(can_view_document(&d, &actor(Role::Admin)));
    }

    #[test]
    fn test_role_document_scoped_by_creation_role() {
        // The document keeps the creator's role from creation time, so a
        // viewer with a different current role is denied even if the
        // owner's role has since changed.
        let owner = actor(Role::Publisher);
        let d = doc(AccessTier::Role, owner.id, Role::Editor);
        assert!(can_view_document(&d, &owner)); // still the owner
        assert!(!can_view_document(&d, &actor(Role::Publisher)));
    }

    #[test]
    fn test_mutation_restricted_to_owner_and_admin() {
        let me = actor(Role::User);
        let d = doc(AccessTier::Public, me.id, Role::User);

        assert!(can_mutate_document(&d, &me));
        assert!(can_mutate_document(&d, &actor(Role::Admin)));
        assert!(!can_mutate_document(&d, &actor(Role::Editor)));
    }

    #[test]
    fn test_denial_reasons() {
        let stranger = actor(Role::User);
        let d = doc(AccessTier::Private, Uuid::new_v4(), Role::User);

        let err = ensure_can_view_document(&d, &stranger).unwrap_err();
        assert_eq!(err.message, "You don't have permission to view this document");

        let err = ensure_can_update_document(&d, &stranger).unwrap_err();
        assert_eq!(
            err.message,
            "You don't have permission to update this document"
        );

        let err = ensure_can_delete_document(&d, &stranger).unwrap_err();
        assert_eq!(
            err.message,
            "You don't have permission to delete this document"
        );
    }
}
