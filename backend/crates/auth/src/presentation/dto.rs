//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{
    session::Session,
    user::{PasswordCredentials, User},
};

// ============================================================================
// Register / Login
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<RegisterRequest> for PasswordCredentials {
    fn from(req: RegisterRequest) -> Self {
        PasswordCredentials::new(req.username, req.password)
    }
}

impl From<LoginRequest> for PasswordCredentials {
    fn from(req: LoginRequest) -> Self {
        PasswordCredentials::new(req.username, req.password)
    }
}

// ============================================================================
// Responses
// ============================================================================

/// User info response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Option<i32>,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.value()),
            username: user.username,
        }
    }
}

/// Session issued on login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    pub user: UserResponse,
    pub created_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
    pub last_active_at: Option<DateTime<Utc>>,
    pub is_revoked: bool,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id.into_inner(),
            user: session.user.into(),
            created_at: session.created_at,
            revoked_at: session.revoked_at,
            expires_at: session.expires_at,
            last_active_at: session.last_active_at,
            is_revoked: session.is_revoked,
        }
    }
}
