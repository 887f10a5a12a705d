use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::info::TypeDesc;

// -----------------------------------------------------------------------------
// FieldDesc

/// Information for a named struct field.
///
/// `visible` marks the field as part of the type's public contract; only
/// visible fields are rendered in literals. `#[derive(Literal)]` sets it from
/// the field's Rust visibility.
///
/// # Examples
///
/// ```
/// use figura_value::info::{FieldDesc, Typed};
///
/// let count = FieldDesc::new("Count", i64::type_desc());
/// assert!(count.is_visible());
///
/// let cache = FieldDesc::hidden("cache", String::type_desc());
/// assert!(!cache.is_visible());
/// assert_eq!(cache.name(), "cache");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDesc {
    name: Cow<'static, str>,
    ty: TypeDesc,
    visible: bool,
}

impl FieldDesc {
    /// Creates a visible field.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>, ty: TypeDesc) -> Self {
        Self {
            name: name.into(),
            ty,
            visible: true,
        }
    }

    /// Creates a field that is not part of the public contract.
    #[inline]
    pub fn hidden(name: impl Into<Cow<'static, str>>, ty: TypeDesc) -> Self {
        Self::new(name, ty).with_visible(false)
    }

    #[inline]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn ty(&self) -> &TypeDesc {
        &self.ty
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

// -----------------------------------------------------------------------------
// FuncDesc

/// Parameter and result types of a function type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FuncDesc {
    inputs: Vec<TypeDesc>,
    outputs: Vec<TypeDesc>,
}

impl FuncDesc {
    #[inline]
    pub fn new(inputs: Vec<TypeDesc>, outputs: Vec<TypeDesc>) -> Self {
        Self { inputs, outputs }
    }

    #[inline]
    pub fn inputs(&self) -> &[TypeDesc] {
        &self.inputs
    }

    #[inline]
    pub fn outputs(&self) -> &[TypeDesc] {
        &self.outputs
    }
}
