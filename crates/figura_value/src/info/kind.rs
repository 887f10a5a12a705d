use core::fmt;

// -----------------------------------------------------------------------------
// Kind

/// The structural category of a type, independent of its name.
///
/// A [`Kind`] is obtained via [`TypeShape::kind`], [`TypeDesc::kind`] or
/// [`Value::kind`].
///
/// [`TypeShape::kind`]: crate::info::TypeShape::kind
/// [`TypeDesc::kind`]: crate::info::TypeDesc::kind
/// [`Value::kind`]: crate::Value::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    Array,
    Slice,
    Map,
    Pointer,
    Chan,
    Func,
    Struct,
    Interface,
    UnsafePointer,
    Opaque,
}

impl Kind {
    /// Returns the built-in type name of a primitive kind, e.g. `"int8"`.
    ///
    /// Composite kinds return `None`.
    pub const fn builtin_name(self) -> Option<&'static str> {
        Some(match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            _ => return None,
        })
    }

    /// Returns the title-cased kind name, e.g. `"Int8"` for [`Kind::Int8`].
    ///
    /// This is the stem of the `<Kind>Ptr` helper constructors.
    /// Composite kinds return `None`.
    pub const fn title(self) -> Option<&'static str> {
        Some(match self {
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Uint => "Uint",
            Self::Uint8 => "Uint8",
            Self::Uint16 => "Uint16",
            Self::Uint32 => "Uint32",
            Self::Uint64 => "Uint64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Complex64 => "Complex64",
            Self::Complex128 => "Complex128",
            Self::String => "String",
            _ => return None,
        })
    }

    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64
        )
    }

    #[inline]
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::Uint | Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64
        )
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array => f.pad("array"),
            Self::Slice => f.pad("slice"),
            Self::Map => f.pad("map"),
            Self::Pointer => f.pad("ptr"),
            Self::Chan => f.pad("chan"),
            Self::Func => f.pad("func"),
            Self::Struct => f.pad("struct"),
            Self::Interface => f.pad("interface"),
            Self::UnsafePointer => f.pad("unsafe.Pointer"),
            Self::Opaque => f.pad("opaque"),
            primitive => f.pad(primitive.builtin_name().unwrap_or_default()),
        }
    }
}
