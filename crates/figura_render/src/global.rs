//! The process-wide default configuration used by [`literally`].

use alloc::string::String;
use std::sync::OnceLock;

use figura_value::Literal;

use crate::Figurative;

static DEFAULT: OnceLock<Figurative> = OnceLock::new();

/// Installs the process-wide default configuration.
///
/// Call it once at start-up, before anything renders through [`literally`].
/// Fails, handing `figurative` back, if a default is already in place
/// (installed earlier or lazily created by a previous render).
pub fn set_default(figurative: Figurative) -> Result<(), Figurative> {
    DEFAULT.set(figurative).inspect_err(|_| {
        log::warn!("a default `Figurative` is already installed, ignoring the new one");
    })
}

/// The process-wide default configuration, [`Figurative::new`] unless
/// another one was installed with [`set_default`].
#[inline]
pub fn default_figurative() -> &'static Figurative {
    DEFAULT.get_or_init(Figurative::new)
}

/// Renders `value` with the [default configuration](default_figurative).
///
/// # Examples
///
/// ```
/// use figura_render::literally;
///
/// assert_eq!(literally(&vec![1_i64, 2, 3, 4]), "[]int64{1, 2, 3, 4}");
/// assert_eq!(literally(&figura_value::Value::nil()), "nil");
/// ```
///
/// # Panics
///
/// If the default configuration is strict and `value` cannot be rendered.
#[inline]
pub fn literally<T: Literal + ?Sized>(value: &T) -> String {
    default_figurative().literally(value)
}

#[cfg(test)]
mod tests {
    use super::{default_figurative, literally, set_default};
    use crate::Figurative;

    #[test]
    fn default_is_installed_once() {
        // Either this call or an earlier render installed a default.
        let _ = set_default(Figurative::new());
        assert!(set_default(Figurative::new().strict()).is_err());
        assert!(core::ptr::eq(default_figurative(), default_figurative()));
    }

    #[test]
    fn renders_with_the_default() {
        assert_eq!(literally("str"), r#""str""#);
        assert_eq!(literally(&[true, false]), "[2]bool{true, false}");
    }
}
