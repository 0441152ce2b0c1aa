use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use syn::Ident;

use crate::{
  error::GenerateError,
  generator::{
    ast::{
      BuildContract, BuildGuard, BuilderDef, BuilderErrorDef, GuardField, PropertyDef, SetterDef, TypedField,
      tokens::{builder_error_ident, setter_ident},
      types::option_inner,
    },
    codegen::{BuilderDeclaration, BuilderGenerator},
    config::GenerationConfig,
    converter::BuilderConverter,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GenerationMode {
  #[default]
  Plain,
  Throwing,
  Fluent,
}

impl GenerationMode {
  #[must_use]
  pub fn strategy(self) -> &'static dyn GenerationStrategy {
    match self {
      Self::Plain => &PlainStrategy,
      Self::Throwing => &ThrowingStrategy,
      Self::Fluent => &FluentStrategy,
    }
  }

  /// Name of the derive attribute selecting this mode.
  #[must_use]
  pub const fn derive_name(self) -> &'static str {
    match self {
      Self::Plain => "Builder",
      Self::Throwing => "ThrowingBuilder",
      Self::Fluent => "FluentBuilder",
    }
  }

  #[must_use]
  pub fn from_derive_name(name: &str) -> Option<Self> {
    match name {
      "Builder" => Some(Self::Plain),
      "ThrowingBuilder" => Some(Self::Throwing),
      "FluentBuilder" => Some(Self::Fluent),
      _ => None,
    }
  }
}

/// One builder flavour.
///
/// The shared skeleton (properties, `fill`, `from_item`, constructor arguments, factory)
/// is assembled by [`GenerationStrategy::plan`]; implementors only decide the build
/// contract, the presence guard and any extra accessors.
pub trait GenerationStrategy: Send + Sync {
  fn mode(&self) -> GenerationMode;

  fn contract(&self, target: &Ident) -> BuildContract;

  /// Guard over the required fields, in declaration order.
  fn guard(&self, target: &Ident, required: Vec<GuardField>) -> BuildGuard;

  fn setters(&self, _properties: &[PropertyDef]) -> Vec<SetterDef> {
    Vec::new()
  }

  fn plan(&self, type_name: &str, fields: &[TypedField], config: &GenerationConfig) -> Result<BuilderDef, GenerateError> {
    BuilderConverter::new(self, config).convert(type_name, fields)
  }

  fn synthesize(
    &self,
    type_name: &str,
    fields: &[TypedField],
    config: &GenerationConfig,
  ) -> Result<BuilderDeclaration, GenerateError> {
    let def = self.plan(type_name, fields, config)?;
    Ok(BuilderGenerator::new(config.visibility).generate(&def))
  }
}

pub struct PlainStrategy;

impl GenerationStrategy for PlainStrategy {
  fn mode(&self) -> GenerationMode {
    GenerationMode::Plain
  }

  fn contract(&self, _target: &Ident) -> BuildContract {
    BuildContract::Optional
  }

  fn guard(&self, _target: &Ident, required: Vec<GuardField>) -> BuildGuard {
    combined_guard(required)
  }
}

pub struct ThrowingStrategy;

impl GenerationStrategy for ThrowingStrategy {
  fn mode(&self) -> GenerationMode {
    GenerationMode::Throwing
  }

  fn contract(&self, target: &Ident) -> BuildContract {
    BuildContract::Fallible(BuilderErrorDef {
      name: builder_error_ident(target),
    })
  }

  fn guard(&self, target: &Ident, required: Vec<GuardField>) -> BuildGuard {
    if required.is_empty() {
      return BuildGuard::None;
    }
    BuildGuard::Sequential {
      error: builder_error_ident(target),
      fields: required,
    }
  }
}

pub struct FluentStrategy;

impl GenerationStrategy for FluentStrategy {
  fn mode(&self) -> GenerationMode {
    GenerationMode::Fluent
  }

  fn contract(&self, _target: &Ident) -> BuildContract {
    BuildContract::Optional
  }

  fn guard(&self, _target: &Ident, required: Vec<GuardField>) -> BuildGuard {
    combined_guard(required)
  }

  fn setters(&self, properties: &[PropertyDef]) -> Vec<SetterDef> {
    properties
      .iter()
      .map(|property| SetterDef {
        method: setter_ident(&property.name),
        field: property.name.clone(),
        value_type: option_inner(&property.ty).unwrap_or(&property.ty).clone(),
      })
      .collect()
  }
}

fn combined_guard(required: Vec<GuardField>) -> BuildGuard {
  if required.is_empty() {
    BuildGuard::None
  } else {
    BuildGuard::Combined(required)
  }
}
