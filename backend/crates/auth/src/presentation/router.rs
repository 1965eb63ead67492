//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::auth_service::AuthService;
use crate::domain::clock::Clock;
use crate::domain::repository::AuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_session;

/// Create the Auth router for any repository and clock
pub fn auth_router<R, C>(service: AuthService<R, C>) -> Router
where
    R: AuthRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    let state = AuthAppState { service };

    let authenticated = Router::new()
        .route("/logout", get(handlers::logout::<R, C>))
        .route("/whoami", get(handlers::whoami))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session::<R, C>,
        ));

    Router::new()
        .route("/register", post(handlers::register::<R, C>))
        .route("/login", post(handlers::login::<R, C>))
        .merge(authenticated)
        .with_state(state)
}
