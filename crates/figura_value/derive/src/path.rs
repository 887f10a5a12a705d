//! Paths of `figura_value` items used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `figura_value` crate.
///
/// 1. For crates that depend on `figura_value`, `::figura_value` is returned.
/// 2. For crates that depend on `figura`, `::figura::value` is returned.
/// 3. For other situations, `::figura_value` is returned, but this may be incorrect.
///
/// Scanning the manifest is relatively expensive, so the path is obtained
/// once per derive and passed around.
pub(crate) fn figura_value() -> syn::Path {
    figura_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("figura_value"))
}

#[inline(always)]
pub(crate) fn macro_exports_(figura_value_path: &syn::Path) -> TokenStream {
    quote! {
        #figura_value_path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn literal_(figura_value_path: &syn::Path) -> TokenStream {
    quote! {
        #figura_value_path::Literal
    }
}

#[inline(always)]
pub(crate) fn value_(figura_value_path: &syn::Path) -> TokenStream {
    quote! {
        #figura_value_path::Value
    }
}

#[inline(always)]
pub(crate) fn typed_(figura_value_path: &syn::Path) -> TokenStream {
    quote! {
        #figura_value_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_desc_(figura_value_path: &syn::Path) -> TokenStream {
    quote! {
        #figura_value_path::info::TypeDesc
    }
}

#[inline(always)]
pub(crate) fn type_path_(figura_value_path: &syn::Path) -> TokenStream {
    quote! {
        #figura_value_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn type_shape_(figura_value_path: &syn::Path) -> TokenStream {
    quote! {
        #figura_value_path::info::TypeShape
    }
}

#[inline(always)]
pub(crate) fn field_desc_(figura_value_path: &syn::Path) -> TokenStream {
    quote! {
        #figura_value_path::info::FieldDesc
    }
}

#[inline(always)]
pub(crate) fn type_desc_cell_(figura_value_path: &syn::Path) -> TokenStream {
    quote! {
        #figura_value_path::impls::TypeDescCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_desc_cell_(figura_value_path: &syn::Path) -> TokenStream {
    quote! {
        #figura_value_path::impls::GenericTypeDescCell
    }
}
