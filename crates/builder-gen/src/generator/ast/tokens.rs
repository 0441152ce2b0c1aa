use proc_macro2::Span;
use quote::format_ident;
use syn::Ident;

use crate::{error::GenerateError, generator::config::unraw};

/// Methods every builder defines; fluent setters must not shadow them.
pub(crate) const BUILDER_RESERVED_METHOD_NAMES: &[&str] = &["new", "fill", "from_item", "build"];

/// Parses a field or type name into an identifier.
///
/// Accepts raw identifiers (`r#type`) as written; bare keywords are rejected.
pub(crate) fn parse_ident(name: &str) -> Result<Ident, GenerateError> {
  syn::parse_str::<Ident>(name).map_err(|_| GenerateError::InvalidIdentifier { name: name.to_string() })
}

pub(crate) fn builder_ident(target: &Ident) -> Ident {
  format_ident!("{}Builder", unraw_ident(target))
}

pub(crate) fn builder_error_ident(target: &Ident) -> Ident {
  format_ident!("{}BuilderError", unraw_ident(target))
}

/// Setter name for a fluent accessor, suffixed with `_value` on collision with a builder method.
pub(crate) fn setter_ident(field: &Ident) -> Ident {
  let name = unraw_ident(field);
  if BUILDER_RESERVED_METHOD_NAMES.contains(&name.as_str()) {
    Ident::new(&format!("{name}_value"), Span::call_site())
  } else {
    field.clone()
  }
}

/// Property name as reported by generated errors, without the raw prefix.
pub(crate) fn property_label(field: &Ident) -> String {
  unraw_ident(field)
}

fn unraw_ident(ident: &Ident) -> String {
  unraw(&ident.to_string()).to_string()
}
