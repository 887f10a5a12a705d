use core::any::Any;
use core::iter::Zip;
use core::slice::Iter;

use crate::impls::TypeDescCell;
use crate::info::{FieldDesc, Kind, TypeDesc, TypeShape, Typed};
use crate::{Literal, Repr, ValueError};

// -----------------------------------------------------------------------------
// Value

/// A runtime value together with its declared type.
///
/// Values are usually produced by [`Literal::to_value`]; hand-built values go
/// through [`Value::new`], which checks that the [`Repr`] fits the type.
///
/// # Examples
///
/// ```
/// use figura_value::{Literal, Repr, Value};
/// use figura_value::info::{Kind, TypeDesc, TypePath, TypeShape};
///
/// let v = vec![1_i64, 2].to_value();
/// assert_eq!(v.kind(), Kind::Slice);
///
/// // type Weekday int
/// let weekday = TypeDesc::named(TypePath::new("time", "Weekday"), TypeShape::Int);
/// let monday = Value::new(weekday, Repr::Int(1)).unwrap();
/// assert_eq!(monday.ty().name(), "Weekday");
///
/// assert!(Value::nil().is_nil());
/// ```
#[derive(Clone, Debug)]
pub struct Value {
    ty: TypeDesc,
    repr: Repr,
}

impl Value {
    /// Creates a value, checking that `repr` fits the shape of `ty`.
    pub fn new(ty: TypeDesc, repr: Repr) -> Result<Self, ValueError> {
        repr.check_fits(ty.shape())?;
        Ok(Self { ty, repr })
    }

    // Callers guarantee the repr fits, e.g. impls built from `Typed`.
    #[inline]
    pub(crate) fn new_unchecked(ty: TypeDesc, repr: Repr) -> Self {
        debug_assert!(
            repr.check_fits(ty.shape()).is_ok(),
            "`{}` repr does not fit {ty:?}",
            repr.variant_name(),
        );
        Self { ty, repr }
    }

    /// The absent value, a nil `interface{}`.
    pub fn nil() -> Self {
        Self {
            ty: Self::type_desc(),
            repr: Repr::Nil,
        }
    }

    /// Gives the value another declared type with a compatible shape.
    ///
    /// This is how `type Celsius float64` values are built from `float64` ones.
    pub fn retype(self, ty: TypeDesc) -> Result<Self, ValueError> {
        Self::new(ty, self.repr)
    }

    #[inline]
    pub fn ty(&self) -> &TypeDesc {
        &self.ty
    }

    #[inline]
    pub fn repr(&self) -> &Repr {
        &self.repr
    }

    #[inline]
    pub fn into_repr(self) -> Repr {
        self.repr
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.ty.kind()
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self.repr, Repr::Nil)
    }

    /// Returns the referent of a non-nil reference.
    pub fn referent(&self) -> Option<&Value> {
        match &self.repr {
            Repr::Ref(Some(referent)) => Some(referent),
            _ => None,
        }
    }

    /// Returns the payload of an opaque value if it is a `T`.
    pub fn downcast_opaque<T: Any>(&self) -> Option<&T> {
        match &self.repr {
            Repr::Opaque(payload) => payload.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Iterates over the declared fields of a record together with their values.
    ///
    /// Non-record values yield nothing.
    pub fn fields(&self) -> Zip<Iter<'_, FieldDesc>, Iter<'_, Value>> {
        match (self.ty.shape(), &self.repr) {
            (TypeShape::Struct(fields), Repr::Record(values)) => fields.iter().zip(values.iter()),
            _ => <&[FieldDesc]>::default()
                .iter()
                .zip(<&[Value]>::default().iter()),
        }
    }
}

/// A [`Value`] stored in a container or a field is dynamically typed, it is
/// declared as `interface{}`: `Vec<Value>` is `[]interface{}`.
impl Typed for Value {
    fn type_desc() -> TypeDesc {
        static CELL: TypeDescCell = TypeDescCell::new();
        CELL.get_or_init(TypeDesc::interface)
    }
}

impl Literal for Value {
    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }
}
