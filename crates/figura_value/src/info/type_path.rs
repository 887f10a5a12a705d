use alloc::borrow::Cow;
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// The namespace and name of a named type.
///
/// The namespace is a path-like identifier of the place that declares the
/// type. Both `/` (`github.com/acme/widgets`) and `::` (`my_crate::shapes`)
/// separated paths are understood by [`namespace_tail`].
///
/// Built-in types (`int`, `string`, `error`, ...) use an empty namespace.
///
/// # Examples
///
/// ```
/// use figura_value::info::TypePath;
///
/// const TIME: TypePath = TypePath::from_static("time", "Time");
/// assert_eq!(TIME.namespace(), "time");
/// assert_eq!(TIME.name(), "Time");
/// assert_eq!(TIME.to_string(), "time.Time");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypePath {
    namespace: Cow<'static, str>,
    name: Cow<'static, str>,
}

impl TypePath {
    /// Creates a new [`TypePath`].
    #[inline]
    pub fn new(namespace: impl Into<Cow<'static, str>>, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Creates a new [`TypePath`] from static strings, usable in constants.
    #[inline]
    pub const fn from_static(namespace: &'static str, name: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(namespace),
            name: Cow::Borrowed(name),
        }
    }

    /// Returns the namespace, empty for built-in types.
    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the type name without namespace.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the type is declared in a named namespace.
    #[inline]
    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

// -----------------------------------------------------------------------------
// namespace_tail

/// Returns the final segment of a namespace path.
///
/// Segments are separated by `/` or `::`, whichever comes last.
///
/// # Examples
///
/// ```
/// use figura_value::info::namespace_tail;
///
/// assert_eq!(namespace_tail("github.com/acme/widgets"), "widgets");
/// assert_eq!(namespace_tail("my_crate::shapes"), "shapes");
/// assert_eq!(namespace_tail("time"), "time");
/// assert_eq!(namespace_tail(""), "");
/// ```
pub fn namespace_tail(namespace: &str) -> &str {
    let slash = namespace.rfind('/').map(|at| at + 1);
    let colons = namespace.rfind("::").map(|at| at + 2);
    match (slash, colons) {
        (Some(a), Some(b)) => &namespace[a.max(b)..],
        (Some(at), None) | (None, Some(at)) => &namespace[at..],
        (None, None) => namespace,
    }
}
