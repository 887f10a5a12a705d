#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod driver;
mod error;
mod figurative;
mod format;
mod global;
mod settings;
mod type_key;
mod type_name;

pub mod providers;

// -----------------------------------------------------------------------------
// Exports

pub use error::{LiteralError, NamingError};
pub use figurative::{ConstructorProvider, DEFAULT_HELPER_NAMESPACE, FailureMode, Figurative};
pub use global::{default_figurative, literally, set_default};
pub use settings::FigurativeSettings;
pub use type_key::TypeKey;
