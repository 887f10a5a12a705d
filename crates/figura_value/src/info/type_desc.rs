use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::info::{FieldDesc, FuncDesc, Kind, TypePath};

// -----------------------------------------------------------------------------
// TypeShape

/// The structure of a declared type.
///
/// Composite shapes refer to their element types through [`TypeDesc`], so a
/// shape is a tree of descriptions, e.g. `map[string][]int` is
///
/// ```text
/// Map { key: String, value: Slice(Int) }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeShape {
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
    /// Fixed-length sequence `[len]elem`.
    Array { len: usize, elem: TypeDesc },
    /// Variable-length sequence `[]elem`.
    Slice(TypeDesc),
    /// `map[key]value`.
    Map { key: TypeDesc, value: TypeDesc },
    /// Single-level reference `*elem`.
    Pointer(TypeDesc),
    /// `chan elem`.
    Chan(TypeDesc),
    /// `func(inputs) outputs`.
    Func(FuncDesc),
    /// A record with fields in declaration order.
    Struct(Vec<FieldDesc>),
    /// A contract type such as `interface{}` or `error`.
    Interface,
    UnsafePointer,
    /// A type whose structure is not described, e.g. a foreign date-time.
    Opaque,
}

impl TypeShape {
    /// Returns the [`Kind`] of this shape.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool => Kind::Bool,
            Self::Int => Kind::Int,
            Self::Int8 => Kind::Int8,
            Self::Int16 => Kind::Int16,
            Self::Int32 => Kind::Int32,
            Self::Int64 => Kind::Int64,
            Self::Uint => Kind::Uint,
            Self::Uint8 => Kind::Uint8,
            Self::Uint16 => Kind::Uint16,
            Self::Uint32 => Kind::Uint32,
            Self::Uint64 => Kind::Uint64,
            Self::Float32 => Kind::Float32,
            Self::Float64 => Kind::Float64,
            Self::Complex64 => Kind::Complex64,
            Self::Complex128 => Kind::Complex128,
            Self::String => Kind::String,
            Self::Array { .. } => Kind::Array,
            Self::Slice(_) => Kind::Slice,
            Self::Map { .. } => Kind::Map,
            Self::Pointer(_) => Kind::Pointer,
            Self::Chan(_) => Kind::Chan,
            Self::Func(_) => Kind::Func,
            Self::Struct(_) => Kind::Struct,
            Self::Interface => Kind::Interface,
            Self::UnsafePointer => Kind::UnsafePointer,
            Self::Opaque => Kind::Opaque,
        }
    }
}

// -----------------------------------------------------------------------------
// TypeDesc

struct TypeDescInner {
    path: Option<TypePath>,
    shape: ShapeSlot,
}

/// Storage of a description's shape.
///
/// `Deferred` shapes are built on first access, after the description itself
/// is cached, so `struct Tree { children: Vec<Tree> }` can name `Tree` inside
/// its own fields.
enum ShapeSlot {
    Ready(TypeShape),
    Deferred {
        type_id: TypeId,
        build: fn() -> TypeShape,
        shape: OnceLock<TypeShape>,
    },
}

/// A declared type: an optional [`TypePath`] and a [`TypeShape`].
///
/// Unnamed types (`[]int`, `struct{}`, `*T`) have no path; named types carry
/// the namespace and name they were declared with. Built-in primitives have no
/// path either, their name comes from [`Kind::builtin_name`].
///
/// Cloning is cheap, the description is shared behind an [`Arc`].
///
/// Equality is structural, except that two deferred descriptions (see
/// [`TypeDesc::deferred`]) are equal only if they describe the same Rust type.
///
/// # Examples
///
/// ```
/// use figura_value::info::{Kind, TypeDesc, TypePath, TypeShape};
///
/// let int = TypeDesc::new(TypeShape::Int);
/// assert_eq!(int.name(), "int");
/// assert_eq!(int.namespace(), "");
///
/// // type Set map[int]struct{}
/// let set = TypeDesc::named(
///     TypePath::new("example.com/sets", "Set"),
///     TypeShape::Map { key: int, value: TypeDesc::structure(vec![]) },
/// );
/// assert_eq!(set.kind(), Kind::Map);
/// assert_eq!(set.name(), "Set");
/// ```
#[derive(Clone)]
pub struct TypeDesc(Arc<TypeDescInner>);

impl PartialEq for TypeDesc {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        if self.0.path != other.0.path {
            return false;
        }
        match (&self.0.shape, &other.0.shape) {
            (ShapeSlot::Deferred { type_id: a, .. }, ShapeSlot::Deferred { type_id: b, .. }) => {
                a == b
            }
            _ => self.shape() == other.shape(),
        }
    }
}

impl Eq for TypeDesc {}

impl Hash for TypeDesc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.path.hash(state);
        self.kind().hash(state);
    }
}

impl fmt::Debug for TypeDesc {
    // Named types print shallowly, their shape may refer back to them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.path {
            Some(path) => f
                .debug_struct("TypeDesc")
                .field("path", &format_args!("{path}"))
                .field("kind", &self.kind())
                .finish(),
            None => f
                .debug_struct("TypeDesc")
                .field("shape", self.shape())
                .finish(),
        }
    }
}

impl TypeDesc {
    /// Creates an unnamed type.
    #[inline]
    pub fn new(shape: TypeShape) -> Self {
        Self(Arc::new(TypeDescInner {
            path: None,
            shape: ShapeSlot::Ready(shape),
        }))
    }

    /// Creates a named type.
    #[inline]
    pub fn named(path: TypePath, shape: TypeShape) -> Self {
        Self(Arc::new(TypeDescInner {
            path: Some(path),
            shape: ShapeSlot::Ready(shape),
        }))
    }

    /// Creates a named type describing `T` whose shape is built by `build` on
    /// first access.
    ///
    /// This is how `#[derive(Literal)]` describes types: `build` may ask for
    /// `T::type_desc()` again (directly or through `Vec<T>`, `Option<Box<T>>`,
    /// ...) as long as it does not look at that description's shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use figura_value::impls::TypeDescCell;
    /// use figura_value::info::{FieldDesc, Kind, TypeDesc, TypePath, TypeShape, Typed};
    ///
    /// // type List struct { Next *List }
    /// struct List(Option<Box<List>>);
    ///
    /// impl Typed for List {
    ///     fn type_desc() -> TypeDesc {
    ///         static CELL: TypeDescCell = TypeDescCell::new();
    ///         CELL.get_or_init(|| {
    ///             TypeDesc::deferred::<Self>(TypePath::new("example.com/lists", "List"), || {
    ///                 TypeShape::Struct(vec![FieldDesc::new("Next", <Option<Box<List>>>::type_desc())])
    ///             })
    ///         })
    ///     }
    /// }
    ///
    /// let list = List::type_desc();
    /// assert_eq!(list.kind(), Kind::Struct);
    /// assert_eq!(list.fields()[0].ty().elem(), Some(&list));
    /// ```
    #[inline]
    pub fn deferred<T: 'static + ?Sized>(path: TypePath, build: fn() -> TypeShape) -> Self {
        Self(Arc::new(TypeDescInner {
            path: Some(path),
            shape: ShapeSlot::Deferred {
                type_id: TypeId::of::<T>(),
                build,
                shape: OnceLock::new(),
            },
        }))
    }

    /// `[]elem`
    #[inline]
    pub fn slice(elem: TypeDesc) -> Self {
        Self::new(TypeShape::Slice(elem))
    }

    /// `[len]elem`
    #[inline]
    pub fn array(len: usize, elem: TypeDesc) -> Self {
        Self::new(TypeShape::Array { len, elem })
    }

    /// `map[key]value`
    #[inline]
    pub fn map(key: TypeDesc, value: TypeDesc) -> Self {
        Self::new(TypeShape::Map { key, value })
    }

    /// `*elem`
    #[inline]
    pub fn pointer(elem: TypeDesc) -> Self {
        Self::new(TypeShape::Pointer(elem))
    }

    /// `chan elem`
    #[inline]
    pub fn chan(elem: TypeDesc) -> Self {
        Self::new(TypeShape::Chan(elem))
    }

    /// `func(inputs) outputs`
    #[inline]
    pub fn func(inputs: Vec<TypeDesc>, outputs: Vec<TypeDesc>) -> Self {
        Self::new(TypeShape::Func(FuncDesc::new(inputs, outputs)))
    }

    /// An anonymous struct, `struct{}` when `fields` is empty.
    #[inline]
    pub fn structure(fields: Vec<FieldDesc>) -> Self {
        Self::new(TypeShape::Struct(fields))
    }

    /// `interface{}`
    #[inline]
    pub fn interface() -> Self {
        Self::new(TypeShape::Interface)
    }

    /// Returns the path of a named type.
    #[inline]
    pub fn path(&self) -> Option<&TypePath> {
        self.0.path.as_ref()
    }

    /// Returns the shape, building it first for deferred descriptions.
    pub fn shape(&self) -> &TypeShape {
        match &self.0.shape {
            ShapeSlot::Ready(shape) => shape,
            ShapeSlot::Deferred { build, shape, .. } => shape.get_or_init(*build),
        }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.shape().kind()
    }

    /// Returns the declaring namespace, empty for unnamed and built-in types.
    #[inline]
    pub fn namespace(&self) -> &str {
        self.path().map_or("", TypePath::namespace)
    }

    /// Returns the type name.
    ///
    /// Named types return their declared name, built-in primitives their
    /// built-in name (`"int"`) and other unnamed types an empty string.
    pub fn name(&self) -> &str {
        match self.path() {
            Some(path) => path.name(),
            None => self.kind().builtin_name().unwrap_or_default(),
        }
    }

    /// Returns `true` if the type has neither a path nor a built-in name.
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.name().is_empty()
    }

    /// Returns the element type of arrays, slices, pointers, channels and
    /// the value type of maps.
    pub fn elem(&self) -> Option<&TypeDesc> {
        match self.shape() {
            TypeShape::Array { elem, .. }
            | TypeShape::Slice(elem)
            | TypeShape::Pointer(elem)
            | TypeShape::Chan(elem) => Some(elem),
            TypeShape::Map { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns the fields of a struct type, empty for other shapes.
    pub fn fields(&self) -> &[FieldDesc] {
        match self.shape() {
            TypeShape::Struct(fields) => fields,
            _ => &[],
        }
    }
}
