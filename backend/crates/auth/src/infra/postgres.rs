//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::{
    session::Session,
    user::{User, UserWithCredentials},
};
use crate::domain::repository::{AuthRepository, StoreError, StoreResult};
use crate::domain::value_object::{
    session_id::SessionId, user_id::UserId, user_password::UserPassword,
};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AuthRepository for PgAuthRepository {
    async fn get_user_by_username(&self, username: &str) -> StoreResult<UserWithCredentials> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_credentials)
            .ok_or(StoreError::NotFound("user"))
    }

    async fn add_user(&self, user: &UserWithCredentials) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            "#,
        )
        .bind(&user.user.username)
        .bind(user.password_hash.as_phc_string())
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_or(e, "username"))?;

        Ok(())
    }

    async fn get_session(&self, session_id: &SessionId) -> StoreResult<Session> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                s.id,
                s.user_id,
                u.username,
                s.created_at,
                s.revoked_at,
                s.expires_at,
                s.last_active_at
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.id = $1
            "#,
        )
        .bind(session_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(SessionRow::into_session)
            .ok_or(StoreError::NotFound("session"))
    }

    async fn create_session(&self, session: &Session) -> StoreResult<()> {
        let user_id = owner_id(session)?;

        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(session.id.as_str())
        .bind(user_id)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_or(e, "session"))?;

        Ok(())
    }
}

/// Id of the stored user owning `session`
fn owner_id(session: &Session) -> StoreResult<i32> {
    session
        .user
        .id
        .map(|id| id.value())
        .ok_or(StoreError::NotFound("user"))
}

/// Map unique violations to `Conflict`, dangling user references to
/// `NotFound`, everything else to `Database`
fn conflict_or(err: sqlx::Error, what: &'static str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::Conflict(what)
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            StoreError::NotFound("user")
        }
        _ => StoreError::Database(err),
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    username: String,
    password: String,
}

impl UserRow {
    fn into_credentials(self) -> UserWithCredentials {
        UserWithCredentials {
            user: User::new(UserId::new(self.id), self.username),
            password_hash: UserPassword::from_db(self.password),
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: String,
    user_id: i32,
    username: String,
    created_at: Option<DateTime<Utc>>,
    revoked_at: Option<DateTime<Utc>>,
    expires_at: DateTime<Utc>,
    last_active_at: Option<DateTime<Utc>>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            id: SessionId::from(self.id),
            user: User::new(UserId::new(self.user_id), self.username),
            created_at: self.created_at,
            is_revoked: self.revoked_at.is_some(),
            revoked_at: self.revoked_at,
            expires_at: self.expires_at,
            last_active_at: self.last_active_at,
        }
    }
}
