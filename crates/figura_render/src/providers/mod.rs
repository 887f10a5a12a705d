//! Constructor providers registered by [`Figurative::new`].

#[cfg(feature = "chrono")]
mod time;

#[cfg(feature = "chrono")]
pub use time::time_constructor;

use crate::Figurative;

#[cfg_attr(not(feature = "chrono"), expect(unused_variables, reason = "no default providers"))]
pub(crate) fn register_defaults(figurative: &mut Figurative) {
    #[cfg(feature = "chrono")]
    figurative.register_provider(
        crate::TypeKey::from(figura_value::impls::TIME_PATH),
        time_constructor,
    );
}
