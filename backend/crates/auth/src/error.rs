//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::crypto::RandomError;
use platform::password::PasswordHashError;
use thiserror::Error;

use crate::domain::repository::StoreError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Store failure passed through unchanged (including `NotFound`)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Password did not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Hashing or hash parsing failed
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] PasswordHashError),

    /// Session lookup failed at the store
    #[error("Failed to get session: {0}")]
    SessionLookup(#[source] StoreError),

    /// Session expired or revoked
    #[error("Session expired")]
    SessionExpired,

    /// Session could not be written to or read back from the store
    #[error("Failed to store session: {0}")]
    SessionStore(#[source] StoreError),

    /// Session id could not be generated
    #[error("Failed to create session: {0}")]
    SessionGeneration(#[from] RandomError),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Store(StoreError::NotFound(_)) => ErrorKind::NotFound,
            AuthError::Store(StoreError::Conflict(_)) => ErrorKind::Conflict,
            AuthError::Store(StoreError::Database(_)) => ErrorKind::InternalServerError,
            AuthError::InvalidCredentials
            | AuthError::SessionLookup(_)
            | AuthError::SessionExpired => ErrorKind::Unauthorized,
            AuthError::Hashing(_)
            | AuthError::SessionStore(_)
            | AuthError::SessionGeneration(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the source; clients only see the kind.
    pub fn into_app_error(self) -> AppError {
        match self.kind() {
            kind if kind.is_server_error() => {
                AppError::internal(kind.as_str()).with_source(self)
            }
            kind => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Store(StoreError::Database(e)) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Hashing(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::SessionStore(e) => {
                tracing::error!(error = %e, "Session store error");
            }
            AuthError::SessionGeneration(e) => {
                tracing::error!(error = %e, "Session id generation error");
            }
            AuthError::SessionLookup(StoreError::Database(e)) => {
                tracing::error!(error = %e, "Session lookup database error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_store_errors_pass_through() {
        let err = AuthError::from(StoreError::NotFound("user"));
        assert_eq!(err.to_string(), "user not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = AuthError::from(StoreError::Conflict("username"));
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_session_errors() {
        let err = AuthError::SessionLookup(StoreError::NotFound("session"));
        assert_eq!(err.to_string(), "Failed to get session: session not found");
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        assert_eq!(AuthError::SessionExpired.to_string(), "Session expired");
    }

    #[test]
    fn test_generation_error_message() {
        let err = AuthError::from(RandomError::InvalidAlphabet);
        assert!(err.to_string().starts_with("Failed to create session: "));
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = AuthError::Store(StoreError::Database(sqlx::Error::PoolClosed));
        let app = err.into_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("pool"));
        assert!(std::error::Error::source(&app).is_some());

        let err = AuthError::SessionStore(StoreError::NotFound("session"));
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert_eq!(err.into_app_error().message(), "Internal Server Error");
    }

    #[test]
    fn test_into_response_status() {
        let response = AuthError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AuthError::Store(StoreError::Conflict("username")).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
