//! User mutation decisions.

use uuid::Uuid;

use dochub_core::error::AppError;

use super::{Actor, is_owner};

/// Whether the actor may update or delete the target user.
///
/// Users may mutate themselves; privileged actors may mutate anyone.
pub fn can_mutate_user(target_user_id: Uuid, actor: &Actor) -> bool {
    is_owner(target_user_id, actor.id) || actor.is_privileged()
}

/// Denies with the update-permission reason unless [`can_mutate_user`].
pub fn ensure_can_update_user(target_user_id: Uuid, actor: &Actor) -> Result<(), AppError> {
    if can_mutate_user(target_user_id, actor) {
        Ok(())
    } else {
        Err(AppError::unauthorized(
            "You don't have permission to update this user",
        ))
    }
}

/// Denies with the delete-permission reason unless [`can_mutate_user`].
pub fn ensure_can_delete_user(target_user_id: Uuid, actor: &Actor) -> Result<(), AppError> {
    if can_mutate_user(target_user_id, actor) {
        Ok(())
    } else {
        Err(AppError::unauthorized(
            "You don't have permission to delete this user",
        ))
    }
}

#[cfg(test)]
mod tests {
    use dochub_entity::user::Role;

    use super::*;

    #[test]
    fn test_self_mutation_allowed() {
        let me = Actor {
            id: Uuid::new_v4(),
            role: Role::User,
        };
        assert!(can_mutate_user(me.id, &me));
    }

    #[test]
    fn test_admin_may_mutate_anyone() {
        let admin = Actor {
            id: Uuid::new_v4(),
            role: Role::Admin,
        };
        assert!(can_mutate_user(Uuid::new_v4(), &admin));
    }

    #[test]
    fn test_stranger_denied_with_reason() {
        let actor = Actor {
            id: Uuid::new_v4(),
            role: Role::Moderator,
        };
        let err = ensure_can_update_user(Uuid::new_v4(), &actor).unwrap_err();
        assert_eq!(err.message, "You don't have permission to update this user");

        let err = ensure_can_delete_user(Uuid::new_v4(), &actor).unwrap_err();
        assert_eq!(err.message, "You don't have permission to delete this user");
    }
}
