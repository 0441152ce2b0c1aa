use proc_macro2::TokenStream;

use crate::error::GenerateError;

/// Pretty-prints generated items through `prettyplease`.
pub fn format_tokens(tokens: TokenStream) -> Result<String, GenerateError> {
  let syntax_tree = syn::parse2::<syn::File>(tokens)?;
  Ok(prettyplease::unparse(&syntax_tree))
}

/// Prefixes formatted code with the generated-file banner.
pub fn with_header(code: &str, source_path: &str) -> String {
  format!(
    "// This file was generated by builder-gen {}. Do not edit by hand.\n// Source: {source_path}\n\n{code}",
    env!("CARGO_PKG_VERSION")
  )
}
