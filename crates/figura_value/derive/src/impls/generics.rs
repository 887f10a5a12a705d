use proc_macro2::TokenStream;
use quote::quote;
use syn::{ImplGenerics, TypeGenerics};

use crate::derive_data::LiteralDerive;

/// Split generics, adding `Literal + Typed` bounds to every type parameter.
///
/// Existing where clause predicates are kept.
pub(super) fn split_generics<'a>(
    derive: &'a LiteralDerive,
) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
    let figura_value_path = &derive.figura_value_path;
    let literal_ = crate::path::literal_(figura_value_path);
    let typed_ = crate::path::typed_(figura_value_path);

    let (impl_generics, ty_generics, where_clause) = derive.generics.split_for_impl();

    let mut generic_where_clause = quote! { where };

    if let Some(where_clause) = where_clause {
        let predicates = where_clause.predicates.iter();
        generic_where_clause.extend(quote! { #(#predicates,)* });
    }

    for param in derive.generics.type_params() {
        let ident = &param.ident;
        generic_where_clause.extend(quote! { #ident: #literal_ + #typed_, });
    }

    (impl_generics, ty_generics, generic_where_clause)
}
