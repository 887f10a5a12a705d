use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use crate::info::{Kind, TypeShape};
use crate::{Value, ValueError};

// -----------------------------------------------------------------------------
// OpaqueValue

/// A shared, type-erased payload of an opaque value.
///
/// Constructor providers downcast it back to the concrete type.
#[derive(Clone)]
pub struct OpaqueValue(Arc<dyn Any + Send + Sync>);

impl OpaqueValue {
    #[inline]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OpaqueValue(..)")
    }
}

// -----------------------------------------------------------------------------
// Repr

/// The data of a [`Value`], one variant per supported value shape.
///
/// Integers are widened to `i64`/`u64`, floats to `f64` and complex numbers
/// to a pair of `f64`; the declared type keeps the original width.
#[derive(Clone, Debug)]
pub enum Repr {
    /// The absent value.
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    /// Real and imaginary parts.
    Complex(f64, f64),
    String(String),
    /// Elements of an array or slice, in order.
    Seq(Vec<Value>),
    /// Key-value pairs in the source container's enumeration order.
    Map(Vec<(Value, Value)>),
    /// One value per declared field, in declaration order.
    Record(Vec<Value>),
    /// The referent of a single-level reference, `None` for a nil reference.
    Ref(Option<Box<Value>>),
    Chan { cap: usize },
    Func,
    UnsafePointer(usize),
    Opaque(OpaqueValue),
}

impl Repr {
    /// Returns a short name of the variant, used in error messages.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Complex(..) => "complex",
            Self::String(_) => "string",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
            Self::Ref(_) => "reference",
            Self::Chan { .. } => "chan",
            Self::Func => "func",
            Self::UnsafePointer(_) => "unsafe pointer",
            Self::Opaque(_) => "opaque",
        }
    }

    /// Checks that this representation can be the data of a type with `shape`.
    pub fn check_fits(&self, shape: &TypeShape) -> Result<(), ValueError> {
        let kind = shape.kind();
        let fits = match self {
            Self::Nil => kind == Kind::Interface,
            Self::Bool(_) => kind == Kind::Bool,
            Self::Int(_) => kind.is_signed(),
            Self::Uint(_) => kind.is_unsigned(),
            Self::Float(_) => kind.is_float(),
            Self::Complex(..) => kind.is_complex(),
            Self::String(_) => kind == Kind::String,
            Self::Seq(items) => match shape {
                TypeShape::Slice(_) => true,
                TypeShape::Array { len, .. } if *len == items.len() => true,
                TypeShape::Array { len, .. } => {
                    return Err(ValueError::ArrayLength {
                        expected: *len,
                        found: items.len(),
                    });
                }
                _ => false,
            },
            Self::Map(_) => kind == Kind::Map,
            Self::Record(values) => match shape {
                TypeShape::Struct(fields) if fields.len() == values.len() => true,
                TypeShape::Struct(fields) => {
                    return Err(ValueError::FieldCount {
                        expected: fields.len(),
                        found: values.len(),
                    });
                }
                _ => false,
            },
            Self::Ref(_) => kind == Kind::Pointer,
            Self::Chan { .. } => kind == Kind::Chan,
            Self::Func => kind == Kind::Func,
            Self::UnsafePointer(_) => kind == Kind::UnsafePointer,
            Self::Opaque(_) => kind == Kind::Opaque,
        };

        if fits {
            Ok(())
        } else {
            Err(ValueError::ShapeMismatch {
                kind,
                repr: self.variant_name(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Repr;
    use crate::ValueError;
    use crate::info::{FieldDesc, Kind, TypeDesc, TypeShape};
    use alloc::vec;

    #[test]
    fn fits_matching_shapes() {
        assert!(Repr::Int(1).check_fits(&TypeShape::Int16).is_ok());
        assert!(Repr::Uint(1).check_fits(&TypeShape::Uint8).is_ok());
        assert!(Repr::Nil.check_fits(&TypeShape::Interface).is_ok());
        assert!(
            Repr::Seq(vec![])
                .check_fits(&TypeShape::Slice(TypeDesc::new(TypeShape::Int)))
                .is_ok()
        );
    }

    #[test]
    fn rejects_mismatch() {
        assert_eq!(
            Repr::Int(1).check_fits(&TypeShape::Uint),
            Err(ValueError::ShapeMismatch {
                kind: Kind::Uint,
                repr: "int"
            })
        );
        assert_eq!(
            Repr::Nil.check_fits(&TypeShape::Pointer(TypeDesc::new(TypeShape::Int))),
            Err(ValueError::ShapeMismatch {
                kind: Kind::Pointer,
                repr: "nil"
            })
        );
    }

    #[test]
    fn rejects_wrong_lengths() {
        let array = TypeShape::Array {
            len: 2,
            elem: TypeDesc::new(TypeShape::Int),
        };
        assert_eq!(
            Repr::Seq(vec![]).check_fits(&array),
            Err(ValueError::ArrayLength {
                expected: 2,
                found: 0
            })
        );

        let record = TypeShape::Struct(vec![FieldDesc::new("A", TypeDesc::new(TypeShape::Int))]);
        assert_eq!(
            Repr::Record(vec![]).check_fits(&record),
            Err(ValueError::FieldCount {
                expected: 1,
                found: 0
            })
        );
    }
}
