//! Formatters of each value shape, called by the dispatcher.
//!
//! Composite formatters render their children through
//! [`driver::render`](crate::driver::render) and wrap them as
//! `TypeName{..}`.

// -----------------------------------------------------------------------------
// Modules

mod mapping;
mod number;
mod quote;
mod record;
mod reference;
mod sequence;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use mapping::write_mapping;
pub(crate) use number::{write_complex, write_float};
pub(crate) use quote::write_quoted;
pub(crate) use record::write_record;
pub(crate) use reference::write_reference;
pub(crate) use sequence::write_sequence;

use alloc::string::String;

use figura_value::info::TypeDesc;

use crate::{Figurative, LiteralError};

/// Appends `TypeName{e1, e2}`, rendering each entry with `entry`.
fn write_composite<I, F>(
    f: &Figurative,
    out: &mut String,
    ty: &TypeDesc,
    entries: I,
    mut entry: F,
) -> Result<(), LiteralError>
where
    I: IntoIterator,
    F: FnMut(&mut String, I::Item) -> Result<(), LiteralError>,
{
    out.push_str(&f.type_name(ty));
    out.push('{');
    for (index, item) in entries.into_iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        entry(out, item)?;
    }
    out.push('}');
    Ok(())
}
