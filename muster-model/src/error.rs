//! Validation error types.

use std::fmt::{self, Display};

/// Errors produced when a raw directory payload fails structural validation.
///
/// Closed enumeration; the viewer matches on it exhaustively when deriving
/// a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The top-level payload was not a JSON array.
    NotAList,
    /// A record's required field was missing or carried the wrong type.
    Field {
        /// Position of the offending record in the payload.
        index: usize,
        /// Name of the missing or mis-typed field.
        field: &'static str,
    },
    /// The response body could not be decoded as JSON at all.
    ///
    /// Produced at the fetch boundary, never by [`crate::validate`] itself,
    /// which only sees already-decoded values.
    Syntax(String),
}

impl Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NotAList => {
                write!(f, "payload is not a list of records")
            }
            FormatError::Field { index, field } => {
                write!(f, "record {index}: missing or invalid `{field}`")
            }
            FormatError::Syntax(msg) => {
                write!(f, "payload is not valid JSON: {msg}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Shorthand result alias for model-level validation.
pub type Result<T> = std::result::Result<T, FormatError>;
