//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by every
//! backend crate:
//! - The error classification ([`error::kind::ErrorKind`])
//! - The unified, transport-neutral error ([`error::app_error::AppError`])
//!
//! Domain crates keep their own `thiserror` enums and convert into
//! [`error::app_error::AppError`] at the presentation boundary.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
