//! Core data model definitions shared across muster crates.
//!
//! The directory endpoint serves untyped JSON; everything downstream of it
//! works with the types in this crate. Structural validation lives here (and
//! not in the HTTP layer) so it can be exercised without network access.

pub mod error;
pub mod ids;
pub mod user;
#[cfg(feature = "serde")]
pub mod validate;

// Intentionally curated re-exports for downstream consumers.
pub use error::{FormatError, Result as ModelResult};
pub use ids::UserId;
pub use user::User;
#[cfg(feature = "serde")]
pub use validate::users_from_value;
