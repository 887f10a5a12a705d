//! Parsing of `#[literal(...)]` attributes.

use syn::{Attribute, LitStr};

use crate::LITERAL_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type level attributes.
///
/// - `#[literal(namespace = "github.com/acme/geo")]`
/// - `#[literal(name = "Point")]`
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub namespace: Option<LitStr>,
    pub name: Option<LitStr>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(LITERAL_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("namespace") {
                    set_once(&mut this.namespace, meta.value()?.parse()?, &meta)
                } else if meta.path.is_ident("name") {
                    set_once(&mut this.name, meta.value()?.parse()?, &meta)
                } else {
                    Err(meta.error("expected `namespace` or `name`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field level attributes.
///
/// - `#[literal(skip)]`: leave the field out of the schema.
/// - `#[literal(visible)]`: render the field even if it is not `pub`.
/// - `#[literal(rename = "X")]`: declare the field as `X`.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub skip: bool,
    pub visible: bool,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(LITERAL_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = true;
                    Ok(())
                } else if meta.path.is_ident("visible") {
                    this.visible = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    set_once(&mut this.rename, meta.value()?.parse()?, &meta)
                } else {
                    Err(meta.error("expected `skip`, `visible` or `rename`"))
                }
            })?;
        }

        Ok(this)
    }
}

fn set_once(
    slot: &mut Option<LitStr>,
    value: LitStr,
    meta: &syn::meta::ParseNestedMeta,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate attribute"));
    }
    if value.value().is_empty() {
        return Err(syn::Error::new(value.span(), "must not be empty"));
    }
    *slot = Some(value);
    Ok(())
}
