use crate::{error::GenerateError, generator::codegen::Visibility};

pub const DEFAULT_IDENTITY_FIELD: &str = "uuid";
pub const DEFAULT_IDENTITY_GENERATOR: &str = "::uuid::Uuid::new_v4";

/// Knobs shared by every generation strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct GenerationConfig {
  #[builder(default)]
  pub visibility: Visibility,
  #[builder(default)]
  pub identity: IdentityPolicy,
}

/// Field that is filled from `generator` when left unset at build time instead of
/// being treated as required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityPolicy {
  pub field_name: String,
  /// Path to a zero-argument function returning the field's value type.
  pub generator: String,
}

impl Default for IdentityPolicy {
  fn default() -> Self {
    Self {
      field_name: DEFAULT_IDENTITY_FIELD.to_string(),
      generator: DEFAULT_IDENTITY_GENERATOR.to_string(),
    }
  }
}

impl IdentityPolicy {
  pub fn new(field_name: impl Into<String>, generator: impl Into<String>) -> Self {
    Self {
      field_name: field_name.into(),
      generator: generator.into(),
    }
  }

  #[must_use]
  pub fn matches(&self, field_name: &str) -> bool {
    unraw(field_name) == unraw(&self.field_name)
  }

  pub(crate) fn generator_path(&self) -> Result<syn::Path, GenerateError> {
    syn::parse_str::<syn::Path>(&self.generator).map_err(|source| GenerateError::InvalidIdentityGenerator {
      generator: self.generator.clone(),
      source,
    })
  }
}

pub(crate) fn unraw(name: &str) -> &str {
  name.strip_prefix("r#").unwrap_or(name)
}
