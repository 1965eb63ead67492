//! Application Layer
//!
//! The authentication service and its configuration.

pub mod auth_service;
pub mod config;

// Re-exports
pub use auth_service::AuthService;
pub use config::AuthConfig;
