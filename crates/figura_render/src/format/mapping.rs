use alloc::string::String;

use figura_value::Value;

use crate::{Figurative, LiteralError};

/// `map[K]V{k: v}`, pairs in the order they were captured in.
pub(crate) fn write_mapping(
    f: &Figurative,
    out: &mut String,
    value: &Value,
    pairs: &[(Value, Value)],
) -> Result<(), LiteralError> {
    super::write_composite(f, out, value.ty(), pairs, |out, (key, item)| {
        crate::driver::write_value(f, out, key)?;
        out.push_str(": ");
        crate::driver::write_value(f, out, item)
    })
}
