//! User Entities
//!
//! [`User`] is the identity handed to callers. Credential material lives only
//! in [`UserWithCredentials`], which never leaves the service boundary.

use serde::Serialize;

use crate::domain::value_object::{
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
};

/// Identity record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Assigned by the store; `None` until the user has been read back
    pub id: Option<UserId>,
    /// Unique, immutable after creation
    pub username: String,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            username: username.into(),
        }
    }

    /// User known only by name (not yet persisted or not read back)
    pub fn unsaved(username: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
        }
    }
}

/// User plus stored password hash, exchanged with the credential store only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithCredentials {
    pub user: User,
    pub password_hash: UserPassword,
}

impl UserWithCredentials {
    /// Drop the credential material
    pub fn into_user(self) -> User {
        self.user
    }
}

/// Username + plaintext password for a single login or registration call
#[derive(Debug)]
pub struct PasswordCredentials {
    pub username: String,
    pub password: RawPassword,
}

impl PasswordCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: RawPassword::new(password.into()),
        }
    }
}
