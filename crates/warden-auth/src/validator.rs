//! Access token validation against live principal records.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use warden_core::error::AppError;
use warden_entity::user::{CredentialStore, User, UserRole};

use crate::jwt::{JwtDecoder, TokenType};

/// The principal behind a validated access token.
///
/// `enabled` is reported as data rather than enforced here; callers that
/// gate on it (request extraction does) reject disabled principals
/// themselves. Validation endpoints get to see the flag either way.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub enabled: bool,
}

impl From<&User> for ValidatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            enabled: user.enabled,
        }
    }
}

/// Validates access tokens and resolves them to current principal state.
///
/// A token is only as good as the record behind it: claims say who the
/// bearer was at mint time, the store says who they are now.
#[derive(Clone)]
pub struct TokenValidator {
    /// Signature and claims verification.
    decoder: Arc<JwtDecoder>,
    /// Principal records.
    users: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator").finish()
    }
}

impl TokenValidator {
    /// Creates a new validator.
    pub fn new(decoder: Arc<JwtDecoder>, users: Arc<dyn CredentialStore>) -> Self {
        Self { decoder, users }
    }

    /// Validates a raw `Authorization` header value.
    ///
    /// The scheme must be `Bearer`; anything else is a malformed header,
    /// reported before the token itself is even looked at.
    pub async fn validate_header(&self, header: &str) -> Result<ValidatedUser, AppError> {
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(AppError::malformed_header)?;

        self.validate_token(token).await
    }

    /// Validates a bare access token string.
    ///
    /// Checks:
    /// 1. Signature and expiry (in that order)
    /// 2. Token type is Access
    /// 3. The subject still resolves to a stored principal
    pub async fn validate_token(&self, token: &str) -> Result<ValidatedUser, AppError> {
        let claims = self.decoder.parse(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::malformed_token("Not an access token"));
        }

        let Some(user) = self.users.find_by_email(&claims.sub).await? else {
            return Err(AppError::principal_not_found());
        };

        Ok(ValidatedUser::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;

    use warden_core::config::auth::AuthConfig;
    use warden_core::error::ErrorKind;
    use warden_database::memory::MemoryCredentialStore;
    use warden_entity::user::{CreateUser, CredentialStore, User, UserRole};

    use crate::jwt::{JwtDecoder, JwtEncoder, TokenType};

    use super::TokenValidator;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-not-for-production".to_string(),
            ..AuthConfig::default()
        }
    }

    async fn seed_user(users: &MemoryCredentialStore) -> User {
        users
            .insert(CreateUser {
                email: "v1@example.com".to_string(),
                full_name: "Validated Person".to_string(),
                password_hash: "irrelevant".to_string(),
                role: UserRole::Authority,
            })
            .await
            .unwrap()
    }

    fn validator(users: Arc<MemoryCredentialStore>) -> TokenValidator {
        TokenValidator::new(Arc::new(JwtDecoder::new(&config())), users)
    }

    #[tokio::test]
    async fn valid_header_resolves_the_principal() {
        let users = Arc::new(MemoryCredentialStore::new());
        let user = seed_user(&users).await;
        let (token, _) = JwtEncoder::new(&config()).mint_access(&user).unwrap();

        let validated = validator(users)
            .validate_header(&format!("Bearer {token}"))
            .await
            .unwrap();
        assert_eq!(validated.id, user.id);
        assert_eq!(validated.email, "v1@example.com");
        assert_eq!(validated.role, UserRole::Authority);
        assert!(validated.enabled);
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_a_malformed_header() {
        let users = Arc::new(MemoryCredentialStore::new());
        let user = seed_user(&users).await;
        let (token, _) = JwtEncoder::new(&config()).mint_access(&user).unwrap();

        let v = validator(users);
        for header in [token.as_str(), "Basic dXNlcjpwdw==", "bearer lowercase"] {
            let err = v.validate_header(header).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedHeader, "header: {header}");
        }
    }

    #[tokio::test]
    async fn refresh_typed_token_is_rejected_as_malformed() {
        let users = Arc::new(MemoryCredentialStore::new());
        let user = seed_user(&users).await;
        let (token, _) = JwtEncoder::new(&config())
            .mint(&user, TokenType::Refresh, Duration::minutes(5))
            .unwrap();

        let err = validator(users).validate_token(&token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedToken);
    }

    #[tokio::test]
    async fn vanished_principal_reports_not_found() {
        let users = Arc::new(MemoryCredentialStore::new());
        let user = seed_user(&users).await;
        let (token, _) = JwtEncoder::new(&config()).mint_access(&user).unwrap();

        // Token was minted against a store that no longer knows the subject.
        let empty = Arc::new(MemoryCredentialStore::new());
        let err = validator(empty).validate_token(&token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::PrincipalNotFound);
    }

    #[tokio::test]
    async fn disabled_principal_is_reported_not_rejected() {
        let users = Arc::new(MemoryCredentialStore::new());
        let user = seed_user(&users).await;
        let (token, _) = JwtEncoder::new(&config()).mint_access(&user).unwrap();

        users.set_enabled(user.id, false).await.unwrap();

        let validated = validator(users).validate_token(&token).await.unwrap();
        assert!(!validated.enabled);
    }

    #[tokio::test]
    async fn expired_token_reports_expiry_before_principal_lookup() {
        let users = Arc::new(MemoryCredentialStore::new());
        let user = seed_user(&users).await;
        let (token, _) = JwtEncoder::new(&config())
            .mint(&user, TokenType::Access, Duration::zero())
            .unwrap();

        let err = validator(users).validate_token(&token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenExpired);
    }
}
