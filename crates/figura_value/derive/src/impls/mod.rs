// -----------------------------------------------------------------------------
// Modules

mod generics;
mod trait_literal;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use generics::split_generics;
use trait_literal::impl_trait_literal;
use trait_typed::impl_trait_typed;

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::LiteralDerive;

/// Generate `Typed` and `Literal` implementations.
pub(crate) fn impl_literal(derive: &LiteralDerive) -> TokenStream {
    let typed_impl = impl_trait_typed(derive);
    let literal_impl = impl_trait_literal(derive);

    quote! {
        #typed_impl

        #literal_impl
    }
}
