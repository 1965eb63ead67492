//! Authentication Service
//!
//! Verifies passwords, registers users, issues sessions and resolves a
//! session id back to its user. Every identity decision goes through here.
//!
//! The service holds no mutable state. Uniqueness and atomicity are left to
//! the store; time is read from the injected [`Clock`]. Dropping a returned
//! future cancels the store call in flight, so callers bound latency with
//! `tokio::time::timeout`.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::clock::Clock;
use crate::domain::entity::{
    session::{Session, SessionIdSource, is_session_valid},
    user::{PasswordCredentials, User, UserWithCredentials},
};
use crate::domain::repository::AuthRepository;
use crate::domain::value_object::{session_id::SessionId, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

pub struct AuthService<R, C> {
    repo: Arc<R>,
    clock: Arc<C>,
    config: Arc<AuthConfig>,
    next_session_id: SessionIdSource,
}

impl<R, C> Clone for AuthService<R, C> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            clock: Arc::clone(&self.clock),
            config: Arc::clone(&self.config),
            next_session_id: self.next_session_id,
        }
    }
}

impl<R, C> AuthService<R, C>
where
    R: AuthRepository + Send + Sync + 'static,
    C: Clock + 'static,
{
    pub fn new(repo: Arc<R>, clock: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            clock,
            config,
            next_session_id: SessionId::generate,
        }
    }

    /// Replace the session id generator (OS entropy by default)
    pub fn with_session_ids(mut self, next_session_id: SessionIdSource) -> Self {
        self.next_session_id = next_session_id;
        self
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Current time as seen by the service
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    /// Check a username/password pair
    ///
    /// Store errors (including an unknown username) are returned unchanged.
    pub async fn authenticate_with_password(
        &self,
        credentials: PasswordCredentials,
    ) -> AuthResult<User> {
        let PasswordCredentials { username, password } = credentials;

        let stored = self.repo.get_user_by_username(&username).await?;

        if !stored.password_hash.verify(&password)? {
            tracing::warn!(username = %username, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(stored.into_user())
    }

    /// Store a new user with a freshly hashed password
    ///
    /// No session is created. The returned user carries only the username;
    /// the store-assigned id is not read back.
    pub async fn register(&self, credentials: PasswordCredentials) -> AuthResult<User> {
        let PasswordCredentials { username, password } = credentials;

        let password_hash = UserPassword::from_raw(&password)?;
        let record = UserWithCredentials {
            user: User::unsaved(username.clone()),
            password_hash,
        };

        self.repo.add_user(&record).await?;

        tracing::info!(username = %username, "User registered");

        Ok(User::unsaved(username))
    }

    /// Resolve a session id to its user
    ///
    /// Expired and revoked sessions are both reported as
    /// [`AuthError::SessionExpired`].
    pub async fn authenticate_session(&self, session_id: &SessionId) -> AuthResult<User> {
        let session = self
            .repo
            .get_session(session_id)
            .await
            .map_err(AuthError::SessionLookup)?;

        let now = self.clock.now();
        if !is_session_valid(&session, now) {
            tracing::debug!(
                session_id = ?session.id,
                expires_at = %session.expires_at,
                is_revoked = session.is_revoked,
                "Rejected session"
            );
            return Err(AuthError::SessionExpired);
        }

        Ok(session.user)
    }

    /// Issue and persist a new session for `user`
    ///
    /// Returns the store's copy of the session. Store errors, including a
    /// user the store does not know, are returned unchanged.
    pub async fn create_session(&self, user: User) -> AuthResult<Session> {
        let session = Session::new_with(
            self.next_session_id,
            user,
            self.clock.now(),
            self.config.session_ttl,
        )?;

        self.repo.create_session(&session).await?;
        let stored = self.repo.get_session(&session.id).await?;

        tracing::info!(
            username = %stored.user.username,
            session_id = ?stored.id,
            expires_at = %stored.expires_at,
            "Session created"
        );

        Ok(stored)
    }
}
