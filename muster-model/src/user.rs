//! The user record.

use crate::ids::UserId;

/// One user record as served by the directory endpoint.
///
/// Only these three fields are retained; anything else present in the remote
/// payload is dropped during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Unique within one fetch result.
    pub id: UserId,
    /// Display name. Expected non-empty, but only the type is enforced.
    pub name: String,
    /// Contact address, displayed verbatim.
    pub email: String,
}
