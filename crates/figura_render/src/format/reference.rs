use alloc::string::String;

use figura_value::Value;
use figura_value::info::{Kind, TypeDesc};

use crate::{Figurative, LiteralError};

/// A single-level reference.
///
/// The declared element type decides the form:
///
/// - primitives and strings: `BoolPtr(true)`, qualified with the helper
///   namespace;
/// - records and opaque values: `&T{..}`.
///
/// Nil references and references to anything else are unsupported.
pub(crate) fn write_reference(
    f: &Figurative,
    out: &mut String,
    value: &Value,
    referent: Option<&Value>,
) -> Result<(), LiteralError> {
    let Some(referent) = referent else {
        return crate::driver::write_unsupported_reference(f, out, value);
    };

    // `*interface{}` holding an `int64` is not an `Int64Ptr`.
    let kind = value.ty().elem().map_or(referent.kind(), TypeDesc::kind);
    if let Some(title) = kind.title() {
        out.push_str(&f.qualifier(f.helper_namespace()));
        out.push_str(title);
        out.push_str("Ptr(");
        crate::driver::write_value(f, out, referent)?;
        out.push(')');
        return Ok(());
    }

    match kind {
        Kind::Struct | Kind::Opaque => {
            out.push('&');
            crate::driver::write_value(f, out, referent)
        }
        _ => crate::driver::write_unsupported_reference(f, out, value),
    }
}
