//! RBAC helpers for role-based route guarding.

use warden_core::error::AppError;

use crate::extractors::AuthUser;

/// Checks that the authenticated principal has the Admin role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if !auth.role.is_admin() {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(())
}

/// Checks that the authenticated principal has at least the Authority role.
pub fn require_authority(auth: &AuthUser) -> Result<(), AppError> {
    if !auth.role.is_authority_or_above() {
        return Err(AppError::forbidden("Authority or Admin access required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use warden_auth::validator::ValidatedUser;
    use warden_entity::user::UserRole;

    use crate::extractors::AuthUser;

    use super::{require_admin, require_authority};

    fn auth_with(role: UserRole) -> AuthUser {
        AuthUser(ValidatedUser {
            id: Uuid::new_v4(),
            email: "t@example.com".to_string(),
            full_name: "Tester".to_string(),
            role,
            enabled: true,
        })
    }

    #[test]
    fn admin_gate() {
        assert!(require_admin(&auth_with(UserRole::Admin)).is_ok());
        assert!(require_admin(&auth_with(UserRole::Authority)).is_err());
        assert!(require_admin(&auth_with(UserRole::User)).is_err());
    }

    #[test]
    fn authority_gate_admits_admins() {
        assert!(require_authority(&auth_with(UserRole::Admin)).is_ok());
        assert!(require_authority(&auth_with(UserRole::Authority)).is_ok());
        assert!(require_authority(&auth_with(UserRole::User)).is_err());
    }
}
