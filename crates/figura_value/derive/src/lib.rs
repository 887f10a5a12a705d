//! See [`Literal`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static LITERAL_ATTRIBUTE_NAME: &str = "literal";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Literal Derivation
///
/// `#[derive(Literal)]` implements `Typed` and `Literal` for a struct.
///
/// | Rust | declared type |
/// |------|---------------|
/// | `struct T { .. }` | `type T struct { .. }` |
/// | `struct T;` | `type T struct{}` |
/// | `struct T(U);` | `type T <shape of U>`, e.g. `type Meters float64` |
///
/// Enums, tuple structs with more than one field and types with lifetime
/// parameters are rejected.
///
/// ## Field Visibility
///
/// `pub` fields are visible and are rendered in literals, other fields are
/// part of the schema but hidden. Visibility can be forced and fields can be
/// renamed or left out of the schema entirely:
///
/// ```rust, ignore
/// #[derive(Literal)]
/// struct Config {
///     #[literal(rename = "Name")]
///     pub name: String,
///     #[literal(visible)]
///     retries: u8,
///     #[literal(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// `skip` fields do not need to implement `Literal`.
///
/// ## Type Path
///
/// The namespace defaults to `module_path!()` and the name to the ident of
/// the type. Both can be overridden at the type level:
///
/// ```rust, ignore
/// #[derive(Literal)]
/// #[literal(namespace = "github.com/acme/geo", name = "Point")]
/// pub struct GeoPoint {
///     pub lat: f64,
///     pub lng: f64,
/// }
/// ```
///
/// ## Generics
///
/// Type parameters get `Literal + Typed` bounds. All instantiations share the
/// declared name, their shapes differ.
///
/// ## Recursive types
///
/// A type may contain itself behind a pointer or collection. Field types are
/// described on first use, after the type itself is registered:
///
/// ```rust, ignore
/// // type Tree struct { Children []Tree }
/// #[derive(Literal)]
/// pub struct Tree {
///     #[literal(rename = "Children")]
///     pub children: Vec<Tree>,
/// }
///
/// // type Node struct { Next *Node }
/// #[derive(Literal)]
/// pub struct Node {
///     #[literal(rename = "Next")]
///     pub next: Option<Box<Node>>,
/// }
/// ```
///
/// `Option<Box<T>>` is the nullable form of `Box<T>` and is described as `*T`.
#[proc_macro_derive(Literal, attributes(literal))]
pub fn derive_literal(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let derive = match derive_data::LiteralDerive::from_input(&ast) {
        Ok(derive) => derive,
        Err(err) => return err.into_compile_error().into(),
    };

    impls::impl_literal(&derive).into()
}
