use crate::info::TypeDesc;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to a type's [`TypeDesc`].
///
/// Implemented for primitives, strings, collections and smart pointers, and
/// by [`#[derive(Literal)]`](crate::derive::Literal) for user structs.
///
/// # Manually Impl
///
/// Non-generic types should cache the description in a
/// [`TypeDescCell`](crate::impls::TypeDescCell):
///
/// ```
/// use figura_value::impls::TypeDescCell;
/// use figura_value::info::{TypeDesc, TypePath, TypeShape, Typed};
///
/// struct Celsius(f64);
///
/// impl Typed for Celsius {
///     fn type_desc() -> TypeDesc {
///         static CELL: TypeDescCell = TypeDescCell::new();
///         CELL.get_or_init(|| {
///             TypeDesc::named(TypePath::new("example.com/units", "Celsius"), TypeShape::Float64)
///         })
///     }
/// }
///
/// assert_eq!(Celsius::type_desc().name(), "Celsius");
/// ```
pub trait Typed: 'static {
    /// Returns the declared type of `Self`.
    fn type_desc() -> TypeDesc;
}
