#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Derive-generated code names this crate `::figura_value`; the alias lets the
// derive macros be used from inside the crate (tests and doc tests).
extern crate self as figura_value;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod value;

pub mod impls;
pub mod info;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use figura_value_derive as derive;
pub use value::{Literal, OpaqueValue, Repr, Value, ValueError};
