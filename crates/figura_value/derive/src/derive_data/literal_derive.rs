use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, LitStr, Type, Visibility};

use crate::derive_data::{FieldAttributes, TypeAttributes};

/// A field that is part of the record schema.
pub(crate) struct LiteralField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// Declared field name.
    pub name: LitStr,
    pub visible: bool,
}

/// The shape a derived type is described with.
pub(crate) enum LiteralKind<'a> {
    /// `struct T { .. }` and `struct T;`, the latter with no fields.
    Record(Vec<LiteralField<'a>>),
    /// `struct T(U);`
    Newtype(&'a Type),
}

/// Everything needed to generate `Typed` and `Literal` implementations.
pub(crate) struct LiteralDerive<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
    pub kind: LiteralKind<'a>,
    pub figura_value_path: syn::Path,
}

impl<'a> LiteralDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lifetime,
                "`Literal` cannot be derived for types with lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let kind = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => {
                    let mut literal_fields = Vec::with_capacity(fields.named.len());
                    for field in &fields.named {
                        let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                        if field_attrs.skip {
                            continue;
                        }
                        // Named fields always have an ident.
                        let Some(ident) = field.ident.as_ref() else {
                            continue;
                        };
                        let name = field_attrs.rename.unwrap_or_else(|| {
                            LitStr::new(&ident.unraw().to_string(), ident.span())
                        });
                        literal_fields.push(LiteralField {
                            ident,
                            ty: &field.ty,
                            name,
                            visible: field_attrs.visible
                                || matches!(field.vis, Visibility::Public(_)),
                        });
                    }
                    LiteralKind::Record(literal_fields)
                }
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                    LiteralKind::Newtype(&fields.unnamed[0].ty)
                }
                Fields::Unnamed(fields) => {
                    return Err(syn::Error::new_spanned(
                        fields,
                        "`Literal` can only be derived for tuple structs with exactly one field",
                    ));
                }
                Fields::Unit => LiteralKind::Record(Vec::new()),
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Literal` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Literal` cannot be derived for unions",
                ));
            }
        };

        Ok(Self {
            ident: &input.ident,
            generics: &input.generics,
            attrs,
            kind,
            figura_value_path: crate::path::figura_value(),
        })
    }

    /// The declared name, a string literal.
    pub fn type_name(&self) -> LitStr {
        self.attrs
            .name
            .clone()
            .unwrap_or_else(|| LitStr::new(&self.ident.unraw().to_string(), Span::call_site()))
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }
}
