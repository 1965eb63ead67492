//! Application Configuration
//!
//! Configuration for the Auth application layer.

use chrono::{DateTime, Duration, Utc};
use platform::cookie::CookieConfig;

use crate::domain::entity::session::Session;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Lifetime of a new session (30 days)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    pub cookie_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "sessionID".to_string(),
            session_ttl: Session::default_ttl(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            cookie_path: "/".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Cookie attributes without lifetime (used for clearing)
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: self.cookie_path.clone(),
            max_age_secs: None,
            expires: None,
        }
    }

    /// Cookie attributes carrying `session` until it expires
    pub fn session_cookie(&self, session: &Session, now: DateTime<Utc>) -> CookieConfig {
        CookieConfig {
            max_age_secs: Some(session.remaining_secs(now)),
            expires: Some(session.expires_at),
            ..self.cookie()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::User;
    use crate::domain::value_object::{session_id::SessionId, user_id::UserId};
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "sessionID");
        assert_eq!(config.session_ttl, Duration::days(30));
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
    }

    #[test]
    fn test_development_is_insecure() {
        assert!(!AuthConfig::development().cookie_secure);
        assert!(!AuthConfig::development().cookie().secure);
    }

    #[test]
    fn test_session_cookie() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let session = Session::with_id(
            SessionId::from("abc"),
            User::new(UserId::new(1), "user1"),
            now + Duration::hours(1),
        );
        let cookie = AuthConfig::default()
            .session_cookie(&session, now)
            .build_set_cookie(session.id.as_str());

        assert!(cookie.starts_with("sessionID=abc"));
        assert!(cookie.contains("; HttpOnly"));
        assert!(cookie.contains("; Secure"));
        assert!(cookie.contains("; Max-Age=3600"));
        assert!(cookie.contains("; Expires=Wed, 01 Jan 2025 01:00:00 GMT"));

        let late = AuthConfig::default()
            .session_cookie(&session, now + Duration::hours(2))
            .build_set_cookie(session.id.as_str());
        assert!(late.contains("; Max-Age=0"));
    }
}
