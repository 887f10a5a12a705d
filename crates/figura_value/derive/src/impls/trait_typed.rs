use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{LiteralDerive, LiteralKind};

/// Generate implementation code for `Typed`.
///
/// Non-generic types store the description in a `TypeDescCell`, generic
/// types in a `GenericTypeDescCell` keyed by `Self`.
pub(super) fn impl_trait_typed(derive: &LiteralDerive) -> TokenStream {
    let figura_value_path = &derive.figura_value_path;
    let typed_ = crate::path::typed_(figura_value_path);
    let type_desc_ = crate::path::type_desc_(figura_value_path);

    let desc_tokens = type_desc_tokens(derive);

    let inner_cell_tokens = if derive.is_generic() {
        let desc_cell = crate::path::generic_type_desc_cell_(figura_value_path);
        quote! {
            static CELL: #desc_cell = #desc_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #desc_tokens
            })
        }
    } else {
        let desc_cell = crate::path::type_desc_cell_(figura_value_path);
        quote! {
            static CELL: #desc_cell = #desc_cell::new();
            CELL.get_or_init(|| {
                #desc_tokens
            })
        }
    };

    let ident = derive.ident;
    let (impl_generics, ty_generics, where_clause) = super::split_generics(derive);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_desc() -> #type_desc_ {
                #inner_cell_tokens
            }
        }
    }
}

/// Expression building the `TypeDesc` of the derived type.
///
/// The shape is deferred: field types are only described when the shape is
/// first read, so fields may mention `Self` (`Vec<Self>`, `Option<Box<Self>>`).
fn type_desc_tokens(derive: &LiteralDerive) -> TokenStream {
    let figura_value_path = &derive.figura_value_path;
    let macro_exports_ = crate::path::macro_exports_(figura_value_path);
    let typed_ = crate::path::typed_(figura_value_path);
    let type_desc_ = crate::path::type_desc_(figura_value_path);
    let type_path_ = crate::path::type_path_(figura_value_path);
    let type_shape_ = crate::path::type_shape_(figura_value_path);
    let field_desc_ = crate::path::field_desc_(figura_value_path);

    let namespace = match &derive.attrs.namespace {
        Some(namespace) => quote!(#namespace),
        None => quote!(#macro_exports_::module_path!()),
    };
    let name = derive.type_name();

    let shape = match &derive.kind {
        LiteralKind::Record(fields) => {
            let field_descs = fields.iter().map(|field| {
                let name = &field.name;
                let ty = field.ty;
                let visible = field.visible;
                quote! {
                    #field_desc_::new(#name, <#ty as #typed_>::type_desc()).with_visible(#visible)
                }
            });
            quote! {
                #type_shape_::Struct(#macro_exports_::vec![#(#field_descs),*])
            }
        }
        LiteralKind::Newtype(ty) => quote! {
            ::core::clone::Clone::clone(<#ty as #typed_>::type_desc().shape())
        },
    };

    quote! {
        #type_desc_::deferred::<Self>(#type_path_::new(#namespace, #name), || #shape)
    }
}
