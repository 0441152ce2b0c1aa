use thiserror::Error;

use crate::decl::DeclKind;

/// Generation-time failures. Each one aborts a single expansion without output.
#[derive(Debug, Error)]
pub enum GenerateError {
  #[error("unable to find declaration name for type")]
  MissingDeclarationName,

  #[error("builder derives support only structs with named fields, found {kind}")]
  WrongDeclarationKind { kind: DeclKind },

  #[error("field `{name}` is declared more than once")]
  DuplicateField { name: String },

  #[error("fluent setter `{setter}` for field `{field}` clashes with the setter of field `{setter}`")]
  SetterCollision { field: String, setter: String },

  #[error("`{name}` is not a valid identifier")]
  InvalidIdentifier { name: String },

  #[error("field `{field}` has an unparseable type `{declared_type}`: {source}")]
  InvalidType {
    field: String,
    declared_type: String,
    #[source]
    source: syn::Error,
  },

  #[error("field `{field}` has an unparseable default expression `{expr}`: {source}")]
  InvalidExpression {
    field: String,
    expr: String,
    #[source]
    source: syn::Error,
  },

  #[error("identity generator `{generator}` is not a valid path: {source}")]
  InvalidIdentityGenerator {
    generator: String,
    #[source]
    source: syn::Error,
  },

  #[error("generated builder failed to parse: {0}")]
  Render(#[from] syn::Error),
}
