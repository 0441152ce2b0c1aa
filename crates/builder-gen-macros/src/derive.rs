use builder_gen::{
  Expansion, GenerationConfig, GenerationMode,
  dispatch,
  source::{declaration_from_derive, ensure_not_generic, generation_config, visibility_of},
};
use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::{Data, DeriveInput};

pub(crate) fn expand(input: &DeriveInput, mode: GenerationMode) -> syn::Result<TokenStream> {
  let declaration = declaration_from_derive(input)?;
  if declaration.kind.is_record() {
    ensure_not_generic(input)?;
  }

  let base = GenerationConfig::builder().visibility(visibility_of(&input.vis)).build();
  let config = generation_config(&input.attrs, base)?;

  match dispatch::expand(&declaration, mode, &config) {
    Ok(Expansion::Generated(generated)) => Ok(generated.declaration.to_token_stream()),
    Ok(Expansion::Diagnosed(diagnostic)) => Err(syn::Error::new(keyword_span(input), diagnostic)),
    Err(error) => Err(syn::Error::new_spanned(&input.ident, error)),
  }
}

fn keyword_span(input: &DeriveInput) -> Span {
  match &input.data {
    Data::Struct(data) => data.struct_token.span,
    Data::Enum(data) => data.enum_token.span,
    Data::Union(data) => data.union_token.span,
  }
}
