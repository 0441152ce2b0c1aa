use syn::{Expr, Ident, Path, Type};

use crate::generator::mode::GenerationMode;

/// Fully resolved builder, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderDef {
  pub name: Ident,
  pub target: Ident,
  pub mode: GenerationMode,
  pub properties: Vec<PropertyDef>,
  pub methods: Vec<BuilderMethod>,
  pub contract: BuildContract,
}

impl BuilderDef {
  #[must_use]
  pub fn error(&self) -> Option<&BuilderErrorDef> {
    match &self.contract {
      BuildContract::Optional => None,
      BuildContract::Fallible(error) => Some(error),
    }
  }

  #[cfg(test)]
  pub(crate) fn setters(&self) -> impl Iterator<Item = &SetterDef> {
    self.methods.iter().filter_map(|method| match method {
      BuilderMethod::Setter(setter) => Some(setter),
      _ => None,
    })
  }
}

/// One `Option<T>` slot on the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
  pub name: Ident,
  pub ty: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderMethod {
  New,
  FromItem,
  Fill { assignments: Vec<FillAssignment> },
  Setter(SetterDef),
  Build { guard: BuildGuard, args: Vec<ConstructorArg> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillAssignment {
  pub field: Ident,
  /// Source field is itself `Option<T>`, so the copy flattens instead of wrapping.
  pub source_optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterDef {
  pub method: Ident,
  pub field: Ident,
  pub value_type: Type,
}

/// What `build()` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildContract {
  Optional,
  Fallible(BuilderErrorDef),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderErrorDef {
  pub name: Ident,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardField {
  pub field: Ident,
  pub property: String,
}

/// Presence checks run before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildGuard {
  None,
  /// Single check over all required fields, bailing out with `None`.
  Combined(Vec<GuardField>),
  /// One check per required field in declaration order, failing on the first unset one.
  Sequential { error: Ident, fields: Vec<GuardField> },
}

/// One argument of the final struct literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorArg {
  /// Unwrapped by the guard.
  Bound(Ident),
  PassThrough(Ident),
  Identity { field: Ident, generator: Path, optional: bool },
  Defaulted { field: Ident, default: Option<Expr>, optional: bool },
}

#[cfg(test)]
impl ConstructorArg {
  pub(crate) fn field(&self) -> &Ident {
    match self {
      Self::Bound(field) | Self::PassThrough(field) => field,
      Self::Identity { field, .. } | Self::Defaulted { field, .. } => field,
    }
  }
}
