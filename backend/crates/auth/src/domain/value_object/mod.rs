//! Value Object Module

pub mod session_id;
pub mod user_id;
pub mod user_password;
