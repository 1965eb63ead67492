//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, clock, repository trait
//! - `application/` - Authentication service and configuration
//! - `infra/` - Postgres and in-memory credential stores
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - Registration and login with username + password
//! - Opaque server-side sessions carried in a cookie
//! - Session expiry and revocation checked on every request
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (salted, adaptive)
//! - Session ids are 32 symbols drawn from the OS entropy source
//! - Expiry is fixed at creation; sessions are never renewed

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuthConfig, AuthService};
pub use domain::{Clock, FixedClock, SystemClock};
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryAuthRepository, PgAuthRepository};
pub use presentation::router::auth_router;
