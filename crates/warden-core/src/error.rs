//! The error type every Warden crate speaks.
//!
//! Lower layers wrap their failures in [`AppError`] and let `?` carry
//! them to the HTTP boundary, where the kind picks the status code.

use std::fmt;
use thiserror::Error;

/// Category of failure, also the stable wire code for clients.
///
/// The token-facing kinds are deliberately fine-grained: callers need to
/// distinguish a bad credential from a disabled account, and an expired
/// token from a forged one, without ever seeing secret material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Unknown identifier or wrong secret. The two cases are never
    /// distinguished on the wire.
    InvalidCredentials,
    /// The principal exists but has been disabled.
    AccountDisabled,
    /// A principal with this identifier already exists.
    DuplicateIdentifier,
    /// The presented refresh token is unknown, revoked, or superseded.
    InvalidRefreshToken,
    /// The presented refresh token's lifetime has lapsed.
    RefreshTokenExpired,
    /// Access token signature verification failed.
    InvalidSignature,
    /// The access token's expiry has passed.
    TokenExpired,
    /// The access token could not be decoded at all.
    MalformedToken,
    /// The Authorization header is missing or lacks the bearer scheme.
    MalformedHeader,
    /// The token verified but its subject no longer exists.
    PrincipalNotFound,
    /// The caller presented no acceptable credential for this endpoint.
    Unauthorized,
    /// The caller's role does not permit the action.
    Forbidden,
    /// No such resource.
    NotFound,
    /// Request input failed validation.
    Validation,
    /// The storage layer failed.
    Database,
    /// Settings could not be loaded or are inconsistent.
    Configuration,
    /// Anything that should not happen in normal operation.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AccountDisabled => "ACCOUNT_DISABLED",
            Self::DuplicateIdentifier => "DUPLICATE_IDENTIFIER",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::RefreshTokenExpired => "REFRESH_TOKEN_EXPIRED",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MalformedToken => "MALFORMED_TOKEN",
            Self::MalformedHeader => "MALFORMED_HEADER",
            Self::PrincipalNotFound => "PRINCIPAL_NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION",
            Self::Database => "DATABASE",
            Self::Configuration => "CONFIGURATION",
            Self::Internal => "INTERNAL",
        };
        f.write_str(code)
    }
}

/// Application-wide error: a kind, a safe message, and an optional cause.
///
/// Messages must never contain token values, passwords, or hashes.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Like [`AppError::new`], but retains the underlying cause for logs.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Uniform rejection for an unknown email or a wrong password.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "Invalid email or password")
    }

    pub fn account_disabled() -> Self {
        Self::new(ErrorKind::AccountDisabled, "Account is disabled")
    }

    pub fn duplicate_identifier(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateIdentifier, message)
    }

    /// Covers unknown, revoked, and superseded refresh tokens alike.
    pub fn invalid_refresh_token() -> Self {
        Self::new(ErrorKind::InvalidRefreshToken, "Refresh token is not recognized")
    }

    pub fn refresh_token_expired() -> Self {
        Self::new(ErrorKind::RefreshTokenExpired, "Refresh token has expired")
    }

    pub fn invalid_signature() -> Self {
        Self::new(ErrorKind::InvalidSignature, "Token signature verification failed")
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorKind::TokenExpired, "Token has expired")
    }

    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedToken, message)
    }

    pub fn malformed_header() -> Self {
        Self::new(
            ErrorKind::MalformedHeader,
            "Authorization header is missing or not a bearer token",
        )
    }

    pub fn principal_not_found() -> Self {
        Self::new(ErrorKind::PrincipalNotFound, "Token subject no longer exists")
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

// The boxed source is not cloneable; clones keep the kind and message only.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("JSON encoding failed: {err}"), err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O failure: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Invalid configuration: {err}"),
            err,
        )
    }
}
