//! SessionId Value Object
//!
//! Opaque session identifier handed to clients (usually as a cookie value).
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::session_id::SessionId;
//!
//! let id = SessionId::generate()?;
//! assert_eq!(id.as_str().len(), SessionId::LENGTH);
//! # Ok::<(), platform::crypto::RandomError>(())
//! ```

use std::fmt;

use platform::crypto::{RandomError, random_token};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Number of symbols in a generated id
    pub const LENGTH: usize = 32;

    /// Draw a fresh id from the OS entropy source
    pub fn generate() -> Result<Self, RandomError> {
        random_token(Self::LENGTH).map(Self)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Ids received from clients are taken as-is; unknown ids fail at lookup.
impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Session ids are bearer credentials; keep them out of debug logs.
impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(4).collect();
        f.debug_tuple("SessionId")
            .field(&format!("{prefix}…"))
            .finish()
    }
}
