//! Session Entity
//!
//! Binds an opaque [`SessionId`] to an authenticated [`User`], with expiry and
//! revocation state.
//!
//! ## Validity
//! A session is usable at `now` iff
//! - it is not revoked, or `now` is not yet past `revoked_at`, and
//! - `now` is not past `expires_at`.
//!
//! Revocation only takes effect once `revoked_at` has passed. Expiry applies
//! regardless of revocation state. A revoked session without a `revoked_at`
//! is revoked from the beginning of time.

use chrono::{DateTime, Duration, Utc};
use platform::crypto::RandomError;

use crate::domain::entity::user::User;
use crate::domain::value_object::session_id::SessionId;

/// Produces ids for new sessions
pub type SessionIdSource = fn() -> Result<SessionId, RandomError>;

/// Auth session entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Unique opaque id (store-enforced)
    pub id: SessionId,
    /// Authenticated user (a copy; the session does not own the user)
    pub user: User,
    /// Filled by the store, never by [`Session::new`]
    pub created_at: Option<DateTime<Utc>>,
    /// Meaningful only when `is_revoked` is set
    pub revoked_at: Option<DateTime<Utc>>,
    /// Fixed at creation, never renewed
    pub expires_at: DateTime<Utc>,
    pub last_active_at: Option<DateTime<Utc>>,
    pub is_revoked: bool,
}

impl Session {
    /// Default lifetime of a session
    pub fn default_ttl() -> Duration {
        Duration::days(30)
    }

    /// Create a session for `user` expiring `ttl` after `now`
    ///
    /// `created_at` and `last_active_at` are left unset.
    pub fn new(user: User, now: DateTime<Utc>, ttl: Duration) -> Result<Self, RandomError> {
        Self::new_with(SessionId::generate, user, now, ttl)
    }

    /// Same as [`Session::new`], drawing the id from `next_id`
    pub fn new_with(
        next_id: SessionIdSource,
        user: User,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, RandomError> {
        let id = next_id()?;
        Ok(Self::with_id(id, user, now + ttl))
    }

    /// Session with a known id and expiry, not revoked
    pub fn with_id(id: SessionId, user: User, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user,
            created_at: None,
            revoked_at: None,
            expires_at,
            last_active_at: None,
            is_revoked: false,
        }
    }

    /// Revocation has taken effect at `now`
    pub fn is_revoked_at(&self, now: DateTime<Utc>) -> bool {
        self.is_revoked && self.revoked_at.is_none_or(|revoked_at| now > revoked_at)
    }

    /// `expires_at` has passed at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_revoked_at(now) && !self.is_expired_at(now)
    }

    /// Seconds until expiry, floored at zero
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}

/// Pure validity predicate; no clock access
pub fn is_session_valid(session: &Session, now: DateTime<Utc>) -> bool {
    session.is_valid_at(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_id::UserId;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn session(expires_at: DateTime<Utc>) -> Session {
        Session::with_id(
            SessionId::from("session1"),
            User::new(UserId::new(1), "user1"),
            expires_at,
        )
    }

    #[test]
    fn test_new_session_fields() {
        let now = at(2025, 1, 1);
        let user = User::new(UserId::new(1), "user1");
        let session = Session::new(user.clone(), now, Session::default_ttl()).unwrap();

        assert_eq!(session.id.as_str().len(), SessionId::LENGTH);
        assert_eq!(session.user, user);
        assert_eq!(session.expires_at, at(2025, 1, 31));
        assert_eq!(session.created_at, None);
        assert_eq!(session.revoked_at, None);
        assert_eq!(session.last_active_at, None);
        assert!(!session.is_revoked);
    }

    #[test]
    fn test_new_sessions_get_distinct_ids() {
        let now = at(2025, 1, 1);
        let user = User::new(UserId::new(1), "user1");
        let a = Session::new(user.clone(), now, Session::default_ttl()).unwrap();
        let b = Session::new(user, now, Session::default_ttl()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_with_custom_id_source() {
        let now = at(2025, 1, 1);
        let user = User::new(UserId::new(1), "user1");

        let fixed: SessionIdSource = || Ok(SessionId::from("fixed"));
        let session = Session::new_with(fixed, user.clone(), now, Duration::hours(1)).unwrap();
        assert_eq!(session.id.as_str(), "fixed");
        assert_eq!(session.expires_at, now + Duration::hours(1));

        let failing: SessionIdSource = || Err(RandomError::InvalidAlphabet);
        let result = Session::new_with(failing, user, now, Duration::hours(1));
        assert!(matches!(result, Err(RandomError::InvalidAlphabet)));
    }

    #[test]
    fn test_valid_before_expiry() {
        let session = session(at(2025, 12, 12));
        assert!(is_session_valid(&session, at(2025, 1, 1)));
    }

    #[test]
    fn test_expiry_boundary() {
        let expires_at = at(2025, 12, 12);
        let session = session(expires_at);

        assert!(is_session_valid(&session, expires_at));
        assert!(!is_session_valid(&session, expires_at + Duration::nanoseconds(1)));
        assert!(!is_session_valid(&session, at(2026, 1, 1)));
    }

    #[test]
    fn test_revoked_in_the_past() {
        let mut session = session(at(2025, 12, 12));
        session.is_revoked = true;
        session.revoked_at = Some(at(2024, 12, 12));

        assert!(!is_session_valid(&session, at(2025, 1, 1)));
    }

    #[test]
    fn test_revoked_in_the_future() {
        let mut session = session(at(2025, 12, 12));
        session.is_revoked = true;
        session.revoked_at = Some(at(2026, 1, 1));

        assert!(is_session_valid(&session, at(2025, 1, 1)));
    }

    #[test]
    fn test_revoked_without_timestamp() {
        let mut session = session(at(2025, 12, 12));
        session.is_revoked = true;

        assert!(!is_session_valid(&session, at(2025, 1, 1)));
    }

    #[test]
    fn test_revoked_at_ignored_without_flag() {
        let mut session = session(at(2025, 12, 12));
        session.revoked_at = Some(at(2024, 12, 12));

        assert!(is_session_valid(&session, at(2025, 1, 1)));
    }

    #[test]
    fn test_expiry_applies_even_if_revocation_pending() {
        let mut session = session(at(2025, 12, 12));
        session.is_revoked = true;
        session.revoked_at = Some(at(2027, 1, 1));

        assert!(!is_session_valid(&session, at(2026, 1, 1)));
    }

    #[test]
    fn test_remaining_secs() {
        let session = session(at(2025, 1, 2));
        assert_eq!(session.remaining_secs(at(2025, 1, 1)), 86_400);
        assert_eq!(session.remaining_secs(at(2025, 1, 3)), 0);
    }
}
