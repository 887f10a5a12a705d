//! Items used by `#[derive(Literal)]` expansions. Not public API.

pub use alloc::vec;
pub use alloc::vec::Vec;
pub use core::module_path;

use crate::info::TypeDesc;
use crate::{Repr, Value};

/// Builds a record value; the derive emits one value per described field.
#[inline]
pub fn record(ty: TypeDesc, fields: Vec<Value>) -> Value {
    Value::new_unchecked(ty, Repr::Record(fields))
}

/// Gives the value of a newtype's only field the newtype's declared type.
#[inline]
pub fn newtype(ty: TypeDesc, inner: Value) -> Value {
    Value::new_unchecked(ty, inner.into_repr())
}
