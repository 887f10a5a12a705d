use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{LiteralDerive, LiteralKind};

/// Generate implementation code for `Literal`.
pub(super) fn impl_trait_literal(derive: &LiteralDerive) -> TokenStream {
    let figura_value_path = &derive.figura_value_path;
    let macro_exports_ = crate::path::macro_exports_(figura_value_path);
    let literal_ = crate::path::literal_(figura_value_path);
    let typed_ = crate::path::typed_(figura_value_path);
    let value_ = crate::path::value_(figura_value_path);

    let body = match &derive.kind {
        LiteralKind::Record(fields) => {
            let members = fields.iter().map(|field| {
                let ident = field.ident;
                quote!(#literal_::to_value(&self.#ident))
            });
            quote! {
                #macro_exports_::record(
                    <Self as #typed_>::type_desc(),
                    #macro_exports_::vec![#(#members),*],
                )
            }
        }
        LiteralKind::Newtype(_) => quote! {
            #macro_exports_::newtype(
                <Self as #typed_>::type_desc(),
                #literal_::to_value(&self.0),
            )
        },
    };

    let ident = derive.ident;
    let (impl_generics, ty_generics, where_clause) = super::split_generics(derive);

    quote! {
        impl #impl_generics #literal_ for #ident #ty_generics #where_clause {
            fn to_value(&self) -> #value_ {
                #body
            }
        }
    }
}
