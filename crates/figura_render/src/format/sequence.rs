use alloc::string::String;

use figura_value::Value;

use crate::{Figurative, LiteralError};

/// `[]int{1, 2}` and `[2]int{1, 2}`.
pub(crate) fn write_sequence(
    f: &Figurative,
    out: &mut String,
    value: &Value,
    items: &[Value],
) -> Result<(), LiteralError> {
    super::write_composite(f, out, value.ty(), items, |out, item| {
        crate::driver::write_value(f, out, item)
    })
}
