use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};

/// Returns `T` for `Option<T>`, `std::option::Option<T>` and `core::option::Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
  let Type::Path(type_path) = ty else {
    return None;
  };
  if type_path.qself.is_some() {
    return None;
  }

  let segments = &type_path.path.segments;
  let last = segments.last()?;
  if last.ident != "Option" {
    return None;
  }

  let prefix_ok = match segments.len() {
    1 => true,
    3 => {
      let root = &segments[0].ident;
      (root == "std" || root == "core") && segments[1].ident == "option"
    }
    _ => false,
  };
  if !prefix_ok {
    return None;
  }

  let PathArguments::AngleBracketed(args) = &last.arguments else {
    return None;
  };
  let mut type_args = args.args.iter().filter_map(|arg| match arg {
    GenericArgument::Type(inner) => Some(inner),
    _ => None,
  });

  match (type_args.next(), type_args.next()) {
    (Some(inner), None) => Some(inner),
    _ => None,
  }
}

/// Widens `T` to `::core::option::Option<T>`; already optional types are returned unchanged.
pub(crate) fn optional_of(ty: &Type) -> Type {
  if option_inner(ty).is_some() {
    ty.clone()
  } else {
    syn::parse_quote! { ::core::option::Option<#ty> }
  }
}

/// Renders a type the way it reads in source: `Option<Vec<String>>` rather than the
/// token-spaced `Option < Vec < String > >`.
pub(crate) fn type_text(ty: &Type) -> String {
  compact_tokens(&ty.to_token_stream().to_string())
}

pub(crate) fn compact_tokens(text: &str) -> String {
  text
    .replace(" :: ", "::")
    .replace(":: ", "::")
    .replace(" < ", "<")
    .replace("< ", "<")
    .replace(" <", "<")
    .replace(" >", ">")
    .replace(" ,", ",")
    .replace("& ", "&")
}
