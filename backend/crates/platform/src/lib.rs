//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Opaque random tokens drawn from the OS entropy source
//! - Password hashing (Argon2id)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
