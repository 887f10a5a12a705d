use alloc::borrow::{Cow, ToOwned};
use alloc::string::String;
use alloc::vec::Vec;

use crate::impls::TypeDescCell;
use crate::info::{TypeDesc, TypeShape, Typed};
use crate::{Literal, Repr, Value};

macro_rules! impl_primitive {
    ($($ty:ty => $shape:ident, $repr:ident as $wide:ty;)*) => {$(
        impl Typed for $ty {
            fn type_desc() -> TypeDesc {
                static CELL: TypeDescCell = TypeDescCell::new();
                CELL.get_or_init(|| TypeDesc::new(TypeShape::$shape))
            }
        }

        impl Literal for $ty {
            #[inline]
            #[allow(clippy::unnecessary_cast, reason = "widening of the widest types")]
            fn to_value(&self) -> Value {
                Value::new_unchecked(Self::type_desc(), Repr::$repr(*self as $wide))
            }
        }
    )*};
}

impl_primitive! {
    i8 => Int8, Int as i64;
    i16 => Int16, Int as i64;
    i32 => Int32, Int as i64;
    i64 => Int64, Int as i64;
    isize => Int, Int as i64;
    u8 => Uint8, Uint as u64;
    u16 => Uint16, Uint as u64;
    u32 => Uint32, Uint as u64;
    u64 => Uint64, Uint as u64;
    usize => Uint, Uint as u64;
    f32 => Float32, Float as f64;
    f64 => Float64, Float as f64;
}

impl Typed for bool {
    fn type_desc() -> TypeDesc {
        static CELL: TypeDescCell = TypeDescCell::new();
        CELL.get_or_init(|| TypeDesc::new(TypeShape::Bool))
    }
}

impl Literal for bool {
    #[inline]
    fn to_value(&self) -> Value {
        Value::new_unchecked(Self::type_desc(), Repr::Bool(*self))
    }
}

// A `char` is a rune: `int32` holding the codepoint.
impl Typed for char {
    #[inline]
    fn type_desc() -> TypeDesc {
        i32::type_desc()
    }
}

impl Literal for char {
    #[inline]
    fn to_value(&self) -> Value {
        Value::new_unchecked(Self::type_desc(), Repr::Int(i64::from(u32::from(*self))))
    }
}

// -----------------------------------------------------------------------------
// Strings

fn string_desc() -> TypeDesc {
    static CELL: TypeDescCell = TypeDescCell::new();
    CELL.get_or_init(|| TypeDesc::new(TypeShape::String))
}

impl Typed for str {
    #[inline]
    fn type_desc() -> TypeDesc {
        string_desc()
    }
}

impl Literal for str {
    #[inline]
    fn to_value(&self) -> Value {
        Value::new_unchecked(string_desc(), Repr::String(self.to_owned()))
    }
}

impl Typed for String {
    #[inline]
    fn type_desc() -> TypeDesc {
        string_desc()
    }
}

impl Literal for String {
    #[inline]
    fn to_value(&self) -> Value {
        self.as_str().to_value()
    }
}

impl Typed for Cow<'static, str> {
    #[inline]
    fn type_desc() -> TypeDesc {
        string_desc()
    }
}

impl Literal for Cow<'static, str> {
    #[inline]
    fn to_value(&self) -> Value {
        self.as_ref().to_value()
    }
}

// -----------------------------------------------------------------------------
// Unit

// `()` is the empty anonymous struct.
impl Typed for () {
    fn type_desc() -> TypeDesc {
        static CELL: TypeDescCell = TypeDescCell::new();
        CELL.get_or_init(|| TypeDesc::structure(Vec::new()))
    }
}

impl Literal for () {
    #[inline]
    fn to_value(&self) -> Value {
        Value::new_unchecked(Self::type_desc(), Repr::Record(Vec::new()))
    }
}
