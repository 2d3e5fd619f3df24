//! Typed errors raised by the core primitives.
//!
//! Messages are stable so callers and tests can match on them.

use thiserror::Error;

use crate::core::field::FieldKind;

/// Failures while building, copying, or updating a [`ValueRecord`].
///
/// [`ValueRecord`]: crate::core::record::ValueRecord
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{record}.{field}: expected {expected}, found {found}")]
    TypeMismatch {
        record: String,
        field: String,
        expected: FieldKind,
        found: FieldKind,
    },
    #[error("{record} has no field '{field}'")]
    UnknownField { record: String, field: String },
    #[error("{record} expects {expected} fields, got {found}")]
    ArityMismatch {
        record: String,
        expected: usize,
        found: usize,
    },
    #[error("{record}.{field} was not set and has no default")]
    MissingField { record: String, field: String },
    #[error("{record}.{field} is not declared mutable")]
    ImmutableField { record: String, field: String },
    #[error("{record} declares field '{field}' more than once")]
    DuplicateField { record: String, field: String },
}

/// Bounds rejected by [`BoundedProperty::new`].
///
/// [`BoundedProperty::new`]: crate::core::bounded::BoundedProperty::new
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// `min` and `max` hold the offending bounds rendered with `{:?}`, so
    /// text bounds keep their quotes and NaN shows as `NaN`.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },
}
