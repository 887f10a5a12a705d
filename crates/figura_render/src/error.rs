use alloc::string::String;
use thiserror::Error;

// -----------------------------------------------------------------------------
// LiteralError

/// A value that cannot be rendered as a literal.
///
/// In [`FailureMode::Lenient`](crate::FailureMode::Lenient) these are never
/// returned, `nil` is rendered in place of the value instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LiteralError {
    /// Callables, channels, unsafe pointers and opaque values without a
    /// constructor provider.
    #[error("Unable to handle type: {type_name}")]
    Unsupported { type_name: String },

    /// Nil references and references to anything but primitives, strings,
    /// records and opaque values.
    #[error("Unsupported type *{type_name}")]
    UnsupportedReference { type_name: String },
}

impl LiteralError {
    /// The rendered name of the offending type.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Unsupported { type_name } | Self::UnsupportedReference { type_name } => type_name,
        }
    }

    #[cold]
    #[inline(never)]
    pub fn handle_error(&self) -> ! {
        panic!("{self}");
    }
}

// -----------------------------------------------------------------------------
// NamingError

/// A type shape that has no Go spelling.
///
/// This is never recoverable: [`Figurative::type_name`](crate::Figurative::type_name)
/// panics with it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NamingError {
    #[error("Unable to get type name: unnamed {kind} type")]
    Unnamed { kind: &'static str },
}

impl NamingError {
    #[cold]
    #[inline(never)]
    pub fn handle_error(&self) -> ! {
        panic!("{self}");
    }
}
