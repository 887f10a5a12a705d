//! Typed runtime values.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod literal;
mod repr;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use error::ValueError;
pub use literal::Literal;
pub use repr::{OpaqueValue, Repr};
pub use value::Value;
