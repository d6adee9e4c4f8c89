//! Principal role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the system.
///
/// Roles are ordered by privilege level: Admin > Authority > User.
/// `Authority` covers back-office staff who may read the audit trail but
/// not manage principals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrator: manages principals and reads everything.
    Admin,
    /// Back-office role with audit read access.
    Authority,
    /// Regular authenticated principal.
    User,
}

impl UserRole {
    /// Numeric rank; a larger value outranks a smaller one.
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Admin => 3,
            Self::Authority => 2,
            Self::User => 1,
        }
    }

    /// True when this role equals or outranks `other`.
    pub fn has_at_least(&self, other: &UserRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// True for `Authority` and `Admin`.
    pub fn is_authority_or_above(&self) -> bool {
        self.has_at_least(&Self::Authority)
    }

    /// Lowercase form used on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Authority => "authority",
            Self::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = warden_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "authority" => Ok(Self::Authority),
            "user" => Ok(Self::User),
            _ => Err(warden_core::AppError::validation(format!(
                "Unknown role '{s}'; expected admin, authority, or user"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_order_the_roles() {
        assert!(UserRole::Admin.has_at_least(&UserRole::User));
        assert!(UserRole::Admin.has_at_least(&UserRole::Admin));
        assert!(UserRole::Authority.has_at_least(&UserRole::User));
        assert!(!UserRole::User.has_at_least(&UserRole::Authority));
        assert!(!UserRole::Authority.has_at_least(&UserRole::Admin));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("AUTHORITY".parse::<UserRole>().unwrap(), UserRole::Authority);
        assert!("invalid".parse::<UserRole>().is_err());
    }
}
