//! Domain Layer
//!
//! Contains entities, value objects, the clock capability and the
//! repository trait.

pub mod clock;
pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::{
    session::{Session, is_session_valid},
    user::{PasswordCredentials, User, UserWithCredentials},
};
pub use repository::{AuthRepository, StoreError, StoreResult};
