//! Containers for static storage of type descriptions.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! - [`TypeDescCell`]: for non-generic types, an [`OnceLock`] around one
//!   [`TypeDesc`].
//! - [`GenericTypeDescCell`]: for generic types. The `static CELL` inside a
//!   generic function is shared by every instantiation, so the cell keeps one
//!   description per [`TypeId`].
//!
//! Both return clones of the stored description, which only bumps a
//! reference count.

use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use figura_utils::hash::{FixedHashState, HashMap};

use crate::info::TypeDesc;

// -----------------------------------------------------------------------------
// TypeDescCell

/// Container for static storage of a non-generic type description.
///
/// ## Example
///
/// ```
/// use figura_value::impls::TypeDescCell;
/// use figura_value::info::{TypeDesc, TypePath, TypeShape, Typed};
///
/// struct Token;
///
/// impl Typed for Token {
///     fn type_desc() -> TypeDesc {
///         static CELL: TypeDescCell = TypeDescCell::new();
///         CELL.get_or_init(|| TypeDesc::named(TypePath::new("auth", "Token"), TypeShape::Opaque))
///     }
/// }
///
/// assert_eq!(Token::type_desc(), Token::type_desc());
/// ```
pub struct TypeDescCell(OnceLock<TypeDesc>);

impl TypeDescCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored description, generating it with `f` on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeDesc) -> TypeDesc {
        self.0.get_or_init(f).clone()
    }
}

// -----------------------------------------------------------------------------
// GenericTypeDescCell

/// Container for static storage of generic type descriptions.
///
/// ## Example
///
/// ```
/// use figura_value::impls::GenericTypeDescCell;
/// use figura_value::info::{TypeDesc, Typed};
///
/// struct Stack<T>(Vec<T>);
///
/// impl<T: Typed> Typed for Stack<T> {
///     fn type_desc() -> TypeDesc {
///         static CELL: GenericTypeDescCell = GenericTypeDescCell::new();
///         CELL.get_or_insert::<Self>(|| TypeDesc::slice(T::type_desc()))
///     }
/// }
///
/// assert_eq!(Stack::<u8>::type_desc(), TypeDesc::slice(u8::type_desc()));
/// assert_ne!(Stack::<u8>::type_desc(), Stack::<i8>::type_desc());
/// ```
pub struct GenericTypeDescCell(RwLock<HashMap<TypeId, TypeDesc>>);

impl GenericTypeDescCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(HashMap::with_hasher(FixedHashState)))
    }

    /// Returns the description stored for `G`, generating it with `f` on first
    /// access.
    ///
    /// No lock is held while `f` runs, so `f` may query the same cell for
    /// other types (e.g. `Vec<Vec<T>>` asking for `Vec<T>`).
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeDesc) -> TypeDesc {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> TypeDesc) -> TypeDesc {
        match self.get_by_type_id(type_id) {
            Some(desc) => desc,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<TypeDesc> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, desc: TypeDesc) -> TypeDesc {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert(desc)
            .clone()
    }
}
