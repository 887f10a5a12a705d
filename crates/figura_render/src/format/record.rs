use alloc::string::String;

use figura_value::Value;

use crate::{Figurative, LiteralError};

/// `pkg.T{A: 1, B: "b"}`, visible fields only.
pub(crate) fn write_record(
    f: &Figurative,
    out: &mut String,
    value: &Value,
) -> Result<(), LiteralError> {
    let ty = value.ty();
    if ty.is_anonymous() && ty.fields().is_empty() {
        out.push_str("struct{}{}");
        return Ok(());
    }

    let visible = value.fields().filter(|(field, _)| field.is_visible());
    super::write_composite(f, out, ty, visible, |out, (field, item)| {
        out.push_str(field.name());
        out.push_str(": ");
        crate::driver::write_value(f, out, item)
    })
}
