//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the system.
///
/// Earlier revisions of the API identified roles by a numeric database
/// id and treated id 1 as the administrator. Roles are now a closed
/// enum keyed by a symbolic tag; [`Role::from_legacy_id`] keeps the
/// historical numeric mapping available for old clients and seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrator; sees and mutates everything.
    Admin,
    /// Regular account.
    User,
    /// Can author content on behalf of others.
    Editor,
    /// Can publish role-scoped content.
    Publisher,
    /// Moderates user-generated content.
    Moderator,
}

impl Role {
    /// Whether this role carries administrative privileges.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Map the historical numeric role id to a variant.
    ///
    /// The ids follow the original seed order (1 = admin, 2 = user, ...).
    pub fn from_legacy_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::Admin),
            2 => Some(Self::User),
            3 => Some(Self::Editor),
            4 => Some(Self::Publisher),
            5 => Some(Self::Moderator),
            _ => None,
        }
    }

    /// The historical numeric id for this role.
    pub fn legacy_id(&self) -> i64 {
        match self {
            Self::Admin => 1,
            Self::User => 2,
            Self::Editor => 3,
            Self::Publisher => 4,
            Self::Moderator => 5,
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Editor => "editor",
            Self::Publisher => "publisher",
            Self::Moderator => "moderator",
        }
    }

    /// All roles in legacy-id order.
    pub fn all() -> [Role; 5] {
        [
            Self::Admin,
            Self::User,
            Self::Editor,
            Self::Publisher,
            Self::Moderator,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = dochub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "editor" => Ok(Self::Editor),
            "publisher" => Ok(Self::Publisher),
            "moderator" => Ok(Self::Moderator),
            _ => Err(dochub_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, user, editor, publisher, moderator"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_admin_id() {
        assert!(Role::from_legacy_id(1).unwrap().is_privileged());
        assert!(!Role::from_legacy_id(2).unwrap().is_privileged());
        assert_eq!(Role::from_legacy_id(99), None);
    }

    #[test]
    fn test_legacy_id_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::from_legacy_id(role.legacy_id()), Some(role));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("PUBLISHER".parse::<Role>().unwrap(), Role::Publisher);
        assert!("root".parse::<Role>().is_err());
    }
}
