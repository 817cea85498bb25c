//! Errors raised while building lookup tables.
//!
//! Lookups themselves never fail with an error: a missing key is `Absent`.
//! These errors only cover malformed input when a [`Record`](super::Record)
//! is constructed.

use thiserror::Error;

/// Represents errors that can occur when constructing a record.
///
/// # Examples
///
/// ```rust
/// use monadic::lookup::{LookupError, Record};
///
/// let error = Record::try_from_fields([("glid", "albert"), ("glid", "alberta")]).unwrap_err();
/// assert_eq!(error, LookupError::DuplicateField { field: "glid".to_string() });
/// assert_eq!(error.to_string(), "duplicate field `glid` in record");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The same field name appeared twice in one record.
    #[error("duplicate field `{field}` in record")]
    DuplicateField {
        /// The repeated field name.
        field: String,
    },
    /// A field name was the empty string.
    #[error("field names must not be empty")]
    EmptyFieldName,
}
