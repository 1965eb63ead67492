//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::application::auth_service::AuthService;
use crate::domain::clock::Clock;
use crate::domain::repository::{AuthRepository, StoreError};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, RegisterRequest, SessionResponse, UserResponse};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
pub struct AuthAppState<R, C> {
    pub service: AuthService<R, C>,
}

impl<R, C> Clone for AuthAppState<R, C> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R, C>(
    State(state): State<AuthAppState<R, C>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<StatusCode>
where
    R: AuthRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    state.service.register(req.into()).await?;

    Ok(StatusCode::OK)
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
///
/// An unknown username is reported the same way as a wrong password. Any
/// store failure while issuing the session is a server error.
pub async fn login<R, C>(
    State(state): State<AuthAppState<R, C>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AuthRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let user = state
        .service
        .authenticate_with_password(req.into())
        .await
        .map_err(|e| match e {
            AuthError::Store(StoreError::NotFound(_)) => AuthError::InvalidCredentials,
            e => e,
        })?;

    let session = state
        .service
        .create_session(user)
        .await
        .map_err(|e| match e {
            AuthError::Store(e) => AuthError::SessionStore(e),
            e => e,
        })?;

    let cookie = state
        .service
        .config()
        .session_cookie(&session, state.service.now())
        .build_set_cookie(session.id.as_str());

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse::from(session)),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
///
/// Clears the cookie only; the stored session stays valid until it expires.
pub async fn logout<R, C>(State(state): State<AuthAppState<R, C>>) -> impl IntoResponse
where
    R: AuthRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let cookie = state.service.config().cookie().build_delete_cookie();

    (StatusCode::OK, [(header::SET_COOKIE, cookie)])
}

// ============================================================================
// Who Am I
// ============================================================================

/// GET /whoami
pub async fn whoami(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<UserResponse> {
    Json(user.into())
}
