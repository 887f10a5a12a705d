//! Declared-type descriptions.
//!
//! ## Menu
//!
//! - [`TypePath`]: namespace and name of a named type (e.g. `time` + `Time`).
//! - [`TypeShape`]: the structure of a type, e.g. `Slice(elem)` or `Struct(fields)`.
//! - [`Kind`]: the fieldless discriminant of [`TypeShape`].
//! - [`TypeDesc`]: an optional [`TypePath`] plus a [`TypeShape`], cheap to clone.
//! - [`FieldDesc`]: a struct field: name, type and visibility.
//! - [`FuncDesc`]: parameter and result types of a function type.
//! - [`Typed`]: static access to a Rust type's [`TypeDesc`].

// -----------------------------------------------------------------------------
// Modules

mod field_desc;
mod kind;
mod type_desc;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_desc::{FieldDesc, FuncDesc};
pub use kind::Kind;
pub use type_desc::{TypeDesc, TypeShape};
pub use type_path::{TypePath, namespace_tail};
pub use typed::Typed;
