//! Object model error types

use thiserror::Error;

/// Errors surfaced by checked entry points of the object model.
///
/// The acquire/release protocol itself never fails; these only come out of
/// conversions that validate a handle's kind, type registration and config
/// parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// A handle did not refer to the expected kind of object
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A null pointer was handed over where a live object was required
    #[error("Null object handle")]
    NullHandle,

    /// Another descriptor already owns this type name
    #[error("Type already registered under another descriptor: {name}")]
    DuplicateType { name: &'static str },

    /// Unrecognized underflow policy name
    #[error("Invalid underflow policy: {0}")]
    InvalidPolicy(String),
}

pub type ObjectResult<T> = Result<T, ObjectError>;
