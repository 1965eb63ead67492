//! In-Memory Repository Implementation
//!
//! Backs tests and local runs without a database. Mirrors the constraints of
//! the Postgres schema: unique usernames, unique session ids, sequential user
//! ids starting at 1, and sessions that must reference a stored user.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::entity::{
    session::Session,
    user::{User, UserWithCredentials},
};
use crate::domain::repository::{AuthRepository, StoreError, StoreResult};
use crate::domain::value_object::{session_id::SessionId, user_id::UserId};

#[derive(Default)]
struct Tables {
    next_user_id: i32,
    users: HashMap<String, UserWithCredentials>,
    sessions: HashMap<SessionId, Session>,
}

#[derive(Default)]
pub struct InMemoryAuthRepository {
    tables: RwLock<Tables>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a stored session (revocation, clock skew in tests)
    pub async fn put_session(&self, session: Session) {
        let mut tables = self.tables.write().await;
        tables.sessions.insert(session.id.clone(), session);
    }

    pub async fn session_count(&self) -> usize {
        self.tables.read().await.sessions.len()
    }
}

impl AuthRepository for InMemoryAuthRepository {
    async fn get_user_by_username(&self, username: &str) -> StoreResult<UserWithCredentials> {
        let tables = self.tables.read().await;
        tables
            .users
            .get(username)
            .cloned()
            .ok_or(StoreError::NotFound("user"))
    }

    async fn add_user(&self, user: &UserWithCredentials) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if tables.users.contains_key(&user.user.username) {
            return Err(StoreError::Conflict("username"));
        }

        tables.next_user_id += 1;
        let id = UserId::new(tables.next_user_id);
        let record = UserWithCredentials {
            user: User::new(id, user.user.username.clone()),
            password_hash: user.password_hash.clone(),
        };
        tables.users.insert(user.user.username.clone(), record);

        Ok(())
    }

    async fn get_session(&self, session_id: &SessionId) -> StoreResult<Session> {
        let tables = self.tables.read().await;
        tables
            .sessions
            .get(session_id)
            .cloned()
            .ok_or(StoreError::NotFound("session"))
    }

    async fn create_session(&self, session: &Session) -> StoreResult<()> {
        let mut tables = self.tables.write().await;

        let owner_stored = session.user.id.is_some_and(|id| {
            tables
                .users
                .values()
                .any(|stored| stored.user.id == Some(id))
        });
        if !owner_stored {
            return Err(StoreError::NotFound("user"));
        }

        if tables.sessions.contains_key(&session.id) {
            return Err(StoreError::Conflict("session"));
        }

        tables.sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }
}
