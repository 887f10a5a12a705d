use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};

use figura_utils::hash::hashbrown::Equivalent;
use figura_value::Value;
use figura_value::info::{Kind, TypeDesc, TypePath, Typed};

// -----------------------------------------------------------------------------
// TypeKey

/// Registry key of a constructor provider: namespace, type name and whether
/// the provider handles a single-level reference to the type.
///
/// Built-in types have an empty namespace and their built-in name (`int`),
/// unnamed types have both empty.
///
/// A pointer key matches `*T` only, never `**T`.
///
/// # Examples
///
/// ```
/// use figura_render::TypeKey;
/// use figura_value::Literal;
///
/// let key = TypeKey::of_value(&Box::new(1_i64).to_value());
/// assert_eq!(key, TypeKey::new("", "int64", true));
/// assert_eq!(key, TypeKey::pointer_to::<i64>());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct TypeKey {
    namespace: Cow<'static, str>,
    name: Cow<'static, str>,
    pointer: bool,
}

impl TypeKey {
    #[inline]
    pub fn new(
        namespace: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        pointer: bool,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            pointer,
        }
    }

    /// The key of values of type `T`.
    pub fn of<T: Typed + ?Sized>() -> Self {
        TypeKeyRef::of_desc(&T::type_desc(), false).into_owned()
    }

    /// The key of `*T` values.
    pub fn pointer_to<T: Typed + ?Sized>() -> Self {
        TypeKeyRef::of_desc(&T::type_desc(), true).into_owned()
    }

    /// The key a value is looked up with.
    pub fn of_value(value: &Value) -> Self {
        TypeKeyRef::of_value(value).into_owned()
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_pointer(&self) -> bool {
        self.pointer
    }

    #[inline]
    fn borrowed(&self) -> TypeKeyRef<'_> {
        TypeKeyRef {
            namespace: &self.namespace,
            name: &self.name,
            pointer: self.pointer,
        }
    }
}

impl From<TypePath> for TypeKey {
    /// The non-pointer key of the named type.
    fn from(path: TypePath) -> Self {
        Self::new(String::from(path.namespace()), String::from(path.name()), false)
    }
}

impl Hash for TypeKey {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.borrowed().hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for TypeKey {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.borrowed(), f)
    }
}

// -----------------------------------------------------------------------------
// TypeKeyRef

/// Borrowed form of [`TypeKey`], used for registry lookups without allocating.
///
/// Hashes exactly like the owned key.
#[derive(Clone, Copy, Hash)]
pub(crate) struct TypeKeyRef<'a> {
    namespace: &'a str,
    name: &'a str,
    pointer: bool,
}

impl<'a> TypeKeyRef<'a> {
    /// A reference value is keyed by its declared element type.
    pub(crate) fn of_value(value: &'a Value) -> Self {
        let ty = value.ty();
        match (ty.kind(), ty.elem()) {
            (Kind::Pointer, Some(elem)) => Self::of_desc(elem, true),
            _ => Self::of_desc(ty, false),
        }
    }

    fn of_desc(ty: &'a TypeDesc, pointer: bool) -> Self {
        Self {
            namespace: ty.namespace(),
            name: ty.name(),
            pointer,
        }
    }

    fn into_owned(self) -> TypeKey {
        TypeKey::new(String::from(self.namespace), String::from(self.name), self.pointer)
    }
}

impl fmt::Display for TypeKeyRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pointer {
            f.write_str("*")?;
        }
        if !self.namespace.is_empty() {
            write!(f, "{}.", self.namespace)?;
        }
        f.write_str(self.name)
    }
}

impl Equivalent<TypeKey> for TypeKeyRef<'_> {
    #[inline]
    fn equivalent(&self, key: &TypeKey) -> bool {
        self.pointer == key.pointer && self.namespace == key.namespace && self.name == key.name
    }
}

#[cfg(test)]
mod tests {
    use super::{TypeKey, TypeKeyRef};
    use core::hash::BuildHasher;
    use figura_utils::hash::FixedHashState;
    use figura_value::Literal;
    use figura_value::info::{TypeDesc, TypePath, TypeShape};
    use figura_value::{Repr, Value};

    #[test]
    fn builtin_and_unnamed_keys() {
        assert_eq!(TypeKey::of::<i64>(), TypeKey::new("", "int64", false));
        assert_eq!(TypeKey::of::<Vec<u8>>(), TypeKey::new("", "", false));
        assert_eq!(TypeKey::of_value(&Value::nil()), TypeKey::new("", "", false));
    }

    #[test]
    fn pointer_keys_use_the_element_type() {
        let named = TypeDesc::named(TypePath::new("time", "Duration"), TypeShape::Int64);
        let ptr = Value::new(
            TypeDesc::pointer(named.clone()),
            Repr::Ref(Some(Box::new(Value::new(named, Repr::Int(5)).unwrap()))),
        )
        .unwrap();
        assert_eq!(TypeKey::of_value(&ptr), TypeKey::new("time", "Duration", true));

        // `**int` is keyed as a pointer to the unnamed `*int`.
        let double = Box::new(Box::new(1_i32)).to_value();
        assert_eq!(TypeKey::of_value(&double), TypeKey::new("", "", true));

        let optional = Some(Box::new(1_i32)).to_value();
        assert_eq!(TypeKey::of_value(&optional), TypeKey::new("", "int32", true));
    }

    #[test]
    fn borrowed_key_hashes_like_owned() {
        let value = String::from("x").to_value();
        let owned = TypeKey::of_value(&value);
        let borrowed = TypeKeyRef::of_value(&value);
        assert_eq!(
            FixedHashState.hash_one(&owned),
            FixedHashState.hash_one(borrowed)
        );
    }

    #[test]
    fn display() {
        assert_eq!(TypeKey::new("time", "Time", true).to_string(), "*time.Time");
        assert_eq!(TypeKey::new("", "int", false).to_string(), "int");
    }
}
