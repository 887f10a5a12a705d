use crate::impls::TypeDescCell;
use crate::info::{TypeDesc, TypeShape, Typed};
use crate::{Literal, Repr, Value};

/// A `complex64`: single precision real and imaginary parts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex64 {
    pub re: f32,
    pub im: f32,
}

impl Complex64 {
    #[inline]
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

/// A `complex128`: double precision real and imaginary parts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex128 {
    pub re: f64,
    pub im: f64,
}

impl Complex128 {
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl Typed for Complex64 {
    fn type_desc() -> TypeDesc {
        static CELL: TypeDescCell = TypeDescCell::new();
        CELL.get_or_init(|| TypeDesc::new(TypeShape::Complex64))
    }
}

impl Literal for Complex64 {
    #[inline]
    fn to_value(&self) -> Value {
        Value::new_unchecked(
            Self::type_desc(),
            Repr::Complex(f64::from(self.re), f64::from(self.im)),
        )
    }
}

impl Typed for Complex128 {
    fn type_desc() -> TypeDesc {
        static CELL: TypeDescCell = TypeDescCell::new();
        CELL.get_or_init(|| TypeDesc::new(TypeShape::Complex128))
    }
}

impl Literal for Complex128 {
    #[inline]
    fn to_value(&self) -> Value {
        Value::new_unchecked(Self::type_desc(), Repr::Complex(self.re, self.im))
    }
}
