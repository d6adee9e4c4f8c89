//! Shared result alias.

use crate::error::AppError;

/// Shorthand for fallible operations that surface an [`AppError`].
pub type AppResult<T> = Result<T, AppError>;
