//! Repository Traits
//!
//! Interface for credential and session persistence. Implementations live in
//! the infrastructure layer.

use thiserror::Error;

use crate::domain::entity::{session::Session, user::UserWithCredentials};
use crate::domain::value_object::session_id::SessionId;

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by a credential store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No matching record
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Uniqueness constraint violated
    #[error("{0} already exists")]
    Conflict(&'static str),

    /// Backend failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Credential store gateway
///
/// Uniqueness of usernames and session ids is the store's responsibility.
#[trait_variant::make(AuthRepository: Send)]
pub trait LocalAuthRepository {
    /// Find a user and its password hash by username
    async fn get_user_by_username(&self, username: &str) -> StoreResult<UserWithCredentials>;

    /// Persist a new user (fails with `Conflict` on a taken username)
    async fn add_user(&self, user: &UserWithCredentials) -> StoreResult<()>;

    /// Find a session by id, with its user attached
    async fn get_session(&self, session_id: &SessionId) -> StoreResult<Session>;

    /// Persist a new session
    ///
    /// The session's user must carry an id of a stored user; otherwise the
    /// write fails with `NotFound`.
    async fn create_session(&self, session: &Session) -> StoreResult<()>;
}
