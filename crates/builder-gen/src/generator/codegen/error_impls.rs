use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use super::Visibility;
use crate::generator::ast::BuilderErrorDef;

const MISSING_VALUE_MESSAGE: &str = "missing value for property `{}`";

pub(crate) fn generate_builder_error(error: &BuilderErrorDef, builder: &Ident, visibility: Visibility) -> TokenStream {
  let name = &error.name;
  let vis = visibility.to_tokens();
  let doc = format!(" Error returned by [`{builder}::build`].");

  quote! {
    #[doc = #doc]
    #[derive(
      ::core::fmt::Debug,
      ::core::clone::Clone,
      ::core::marker::Copy,
      ::core::cmp::PartialEq,
      ::core::cmp::Eq
    )]
    #vis enum #name {
      /// A required property was still unset when building.
      MissingValue { property: &'static str },
    }

    impl ::std::fmt::Display for #name {
      fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
          Self::MissingValue { property } => ::core::write!(f, #MISSING_VALUE_MESSAGE, property),
        }
      }
    }

    impl ::std::error::Error for #name {}
  }
}
