//! Stored-field extraction.
//!
//! Walks a [`Declaration`] in member order and keeps every variable with storage.
//! Computed members are filtered out; stored members without a simple name or an
//! explicit type are skipped and reported as [`GenerationWarning::SkippedMember`].

use indexmap::{IndexMap, IndexSet};

use crate::{
  decl::{Declaration, DefaultValue, Initializer, VariableDecl},
  error::GenerateError,
  generator::{
    ast::TypedField,
    config::unraw,
    metrics::{GenerationWarning, SkipReason},
  },
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
  pub fields: Vec<TypedField>,
  pub warnings: Vec<GenerationWarning>,
}

pub fn extract(declaration: &Declaration) -> Result<Extraction, GenerateError> {
  let type_name = declaration.name.clone().unwrap_or_default();
  let defaults = defaulted_params(declaration.initializer.as_ref());

  let mut extraction = Extraction::default();
  let mut seen = IndexSet::new();

  for variable in declaration.variables() {
    if !variable.is_stored() {
      continue;
    }

    match typed_field(variable, &defaults) {
      Ok(field) => {
        if !seen.insert(unraw(&field.name).to_string()) {
          return Err(GenerateError::DuplicateField { name: field.name });
        }
        extraction.fields.push(field);
      }
      Err((member, reason)) => extraction.warnings.push(GenerationWarning::SkippedMember {
        type_name: type_name.clone(),
        member,
        reason,
      }),
    }
  }

  Ok(extraction)
}

/// Initializer parameters carrying a default, keyed by parameter name.
pub fn defaulted_params(initializer: Option<&Initializer>) -> IndexMap<&str, &DefaultValue> {
  initializer
    .into_iter()
    .flat_map(|initializer| &initializer.params)
    .filter_map(|param| param.default.as_ref().map(|default| (unraw(&param.name), default)))
    .collect()
}

fn typed_field(
  variable: &VariableDecl,
  defaults: &IndexMap<&str, &DefaultValue>,
) -> Result<TypedField, (String, SkipReason)> {
  let Some(binding) = variable.binding() else {
    return Err((String::new(), SkipReason::MissingName));
  };
  let Some(name) = binding.pattern.identifier() else {
    return Err((binding.pattern.as_written().to_string(), SkipReason::MissingName));
  };
  let Some(declared_type) = binding.declared_type.as_deref().filter(|ty| !ty.trim().is_empty()) else {
    return Err((name.to_string(), SkipReason::MissingType));
  };

  Ok(TypedField {
    name: name.to_string(),
    declared_type: declared_type.trim().to_string(),
    default: defaults.get(unraw(name)).map(|default| (*default).clone()),
  })
}
