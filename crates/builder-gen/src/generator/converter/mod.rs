use itertools::Itertools;
use syn::{Expr, Ident, Type};

use crate::{
  decl::DefaultValue,
  error::GenerateError,
  generator::{
    ast::{
      BuilderDef, BuilderMethod, ConstructorArg, FieldRole, FillAssignment, GuardField, PropertyDef, SetterDef,
      TypedField,
      tokens::{builder_ident, parse_ident, property_label},
      types::{option_inner, optional_of},
    },
    config::{GenerationConfig, unraw},
    mode::GenerationStrategy,
  },
};

#[cfg(test)]
mod tests;

/// A field after its name, type and role have been resolved.
struct ResolvedField {
  ident: Ident,
  ty: Type,
  optional: bool,
  role: FieldRole,
}

/// Lowers a typed field list into a [`BuilderDef`] for one strategy.
pub(crate) struct BuilderConverter<'a, S: GenerationStrategy + ?Sized> {
  strategy: &'a S,
  config: &'a GenerationConfig,
}

impl<'a, S: GenerationStrategy + ?Sized> BuilderConverter<'a, S> {
  pub(crate) fn new(strategy: &'a S, config: &'a GenerationConfig) -> Self {
    Self { strategy, config }
  }

  pub(crate) fn convert(&self, type_name: &str, fields: &[TypedField]) -> Result<BuilderDef, GenerateError> {
    let target = parse_ident(type_name)?;
    if let Some(name) = fields.iter().map(|field| unraw(&field.name)).duplicates().next() {
      return Err(GenerateError::DuplicateField { name: name.to_string() });
    }
    let resolved = fields.iter().map(resolve_field(self.config)).collect::<Result<Vec<_>, _>>()?;

    let properties = resolved
      .iter()
      .map(|field| PropertyDef {
        name: field.ident.clone(),
        ty: optional_of(&field.ty),
      })
      .collect_vec();

    let mut methods = vec![
      BuilderMethod::New,
      BuilderMethod::FromItem,
      BuilderMethod::Fill {
        assignments: fill_assignments(&resolved),
      },
    ];
    let setters = self.strategy.setters(&properties);
    ensure_unique_setters(&setters)?;
    methods.extend(setters.into_iter().map(BuilderMethod::Setter));
    methods.push(BuilderMethod::Build {
      guard: self.strategy.guard(&target, required_fields(&resolved)),
      args: self.constructor_args(&resolved)?,
    });

    Ok(BuilderDef {
      name: builder_ident(&target),
      contract: self.strategy.contract(&target),
      mode: self.strategy.mode(),
      target,
      properties,
      methods,
    })
  }

  fn constructor_args(&self, fields: &[ResolvedField]) -> Result<Vec<ConstructorArg>, GenerateError> {
    fields
      .iter()
      .map(|field| -> Result<ConstructorArg, GenerateError> {
        let ident = field.ident.clone();
        Ok(match &field.role {
          FieldRole::Identity => ConstructorArg::Identity {
            field: ident,
            generator: self.config.identity.generator_path()?,
            optional: field.optional,
          },
          FieldRole::Defaulted(default) => ConstructorArg::Defaulted {
            default: default_expr(&ident, default)?,
            field: ident,
            optional: field.optional,
          },
          FieldRole::Optional => ConstructorArg::PassThrough(ident),
          FieldRole::Required => ConstructorArg::Bound(ident),
        })
      })
      .collect()
  }
}

fn resolve_field(config: &GenerationConfig) -> impl Fn(&TypedField) -> Result<ResolvedField, GenerateError> + '_ {
  move |field: &TypedField| {
    let ident = parse_ident(&field.name)?;
    let ty = syn::parse_str::<Type>(&field.declared_type).map_err(|source| GenerateError::InvalidType {
      field: field.name.clone(),
      declared_type: field.declared_type.clone(),
      source,
    })?;

    Ok(ResolvedField {
      optional: option_inner(&ty).is_some(),
      role: field.role(&config.identity),
      ident,
      ty,
    })
  }
}

/// A renamed setter (`build` -> `build_value`) must not land on another field's setter.
fn ensure_unique_setters(setters: &[SetterDef]) -> Result<(), GenerateError> {
  let name = |ident: &Ident| unraw(&ident.to_string()).to_string();

  for setter in setters.iter().filter(|setter| setter.method != setter.field) {
    let method = name(&setter.method);
    if setters
      .iter()
      .any(|other| other.field != setter.field && name(&other.method) == method)
    {
      return Err(GenerateError::SetterCollision {
        field: name(&setter.field),
        setter: method,
      });
    }
  }

  Ok(())
}

fn fill_assignments(fields: &[ResolvedField]) -> Vec<FillAssignment> {
  fields
    .iter()
    .map(|field| FillAssignment {
      field: field.ident.clone(),
      source_optional: field.optional,
    })
    .collect()
}

fn required_fields(fields: &[ResolvedField]) -> Vec<GuardField> {
  fields
    .iter()
    .filter(|field| field.role == FieldRole::Required)
    .map(|field| GuardField {
      field: field.ident.clone(),
      property: property_label(&field.ident),
    })
    .collect()
}

fn default_expr(field: &Ident, default: &DefaultValue) -> Result<Option<Expr>, GenerateError> {
  match default {
    DefaultValue::Implicit => Ok(None),
    DefaultValue::Expr(expr) => syn::parse_str::<Expr>(expr)
      .map(Some)
      .map_err(|source| GenerateError::InvalidExpression {
        field: property_label(field),
        expr: expr.clone(),
        source,
      }),
  }
}
