use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::{error::GenerateError, format};

mod builder;
mod error_impls;

#[cfg(test)]
mod tests;

pub(crate) use builder::BuilderGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
  #[default]
  Public,
  Crate,
  File,
}

impl Visibility {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "public" => Some(Visibility::Public),
      "crate" => Some(Visibility::Crate),
      "file" => Some(Visibility::File),
      _ => None,
    }
  }

  pub(crate) fn to_tokens(self) -> TokenStream {
    match self {
      Visibility::Public => quote! { pub },
      Visibility::Crate => quote! { pub(crate) },
      Visibility::File => quote! {},
    }
  }
}

/// One top-level item produced for a builder.
#[derive(Debug, Clone)]
pub enum DeclFragment {
  BuilderStruct(TokenStream),
  /// Error enum plus its `Display`/`Error` impls, throwing builders only.
  BuilderError(TokenStream),
  BuilderImpl(TokenStream),
  Conversion(TokenStream),
  /// `make_builder()` on the target type.
  Factory(TokenStream),
}

impl DeclFragment {
  #[must_use]
  pub fn tokens(&self) -> &TokenStream {
    match self {
      Self::BuilderStruct(tokens)
      | Self::BuilderError(tokens)
      | Self::BuilderImpl(tokens)
      | Self::Conversion(tokens)
      | Self::Factory(tokens) => tokens,
    }
  }
}

/// Everything generated for one target, in emission order.
#[derive(Debug, Clone)]
pub struct BuilderDeclaration {
  fragments: Vec<DeclFragment>,
}

impl BuilderDeclaration {
  pub(crate) fn new(fragments: Vec<DeclFragment>) -> Self {
    Self { fragments }
  }

  #[must_use]
  pub fn fragments(&self) -> &[DeclFragment] {
    &self.fragments
  }

  pub fn to_formatted_string(&self) -> Result<String, GenerateError> {
    format::format_tokens(self.to_token_stream())
  }
}

impl ToTokens for BuilderDeclaration {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    for fragment in &self.fragments {
      fragment.tokens().to_tokens(tokens);
    }
  }
}
