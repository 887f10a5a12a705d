use thiserror::Error;

use crate::info::Kind;

// -----------------------------------------------------------------------------
// Error

/// Returned by [`Value::new`](crate::Value::new) when a [`Repr`](crate::Repr)
/// does not fit the shape of its declared type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueError {
    #[error("a `{repr}` representation cannot have a type of kind `{kind}`")]
    ShapeMismatch { kind: Kind, repr: &'static str },

    #[error("array of length {expected} built from {found} elements")]
    ArrayLength { expected: usize, found: usize },

    #[error("struct with {expected} fields built from {found} values")]
    FieldCount { expected: usize, found: usize },
}
