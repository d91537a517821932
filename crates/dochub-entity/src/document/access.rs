//! Document access tier enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visibility class of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "document_access", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    /// Visible to every authenticated user.
    Public,
    /// Visible only to the owner (and admins).
    Private,
    /// Visible to users sharing the creator's role.
    Role,
}

impl AccessTier {
    /// Return the tier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for AccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessTier {
    type Err = dochub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "role" => Ok(Self::Role),
            _ => Err(dochub_core::AppError::validation(format!(
                "Invalid access tier: '{s}'. Expected one of: public, private, role"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("public".parse::<AccessTier>().unwrap(), AccessTier::Public);
        assert_eq!("PRIVATE".parse::<AccessTier>().unwrap(), AccessTier::Private);
        assert_eq!("role".parse::<AccessTier>().unwrap(), AccessTier::Role);
        assert!("secret".parse::<AccessTier>().is_err());
    }
}
