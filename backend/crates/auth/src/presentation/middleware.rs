//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::cookie::extract_cookie;

use crate::domain::clock::Clock;
use crate::domain::entity::user::User;
use crate::domain::repository::AuthRepository;
use crate::domain::value_object::session_id::SessionId;
use crate::presentation::handlers::AuthAppState;

/// Authenticated user stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires a valid session cookie
pub async fn require_session<R, C>(
    State(state): State<AuthAppState<R, C>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: AuthRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let cookie_name = &state.service.config().session_cookie_name;

    let Some(token) = extract_cookie(req.headers(), cookie_name) else {
        tracing::debug!("Request without session cookie");
        return AppError::unauthorized("Missing session cookie").into_response();
    };

    match state
        .service
        .authenticate_session(&SessionId::from(token))
        .await
    {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}
