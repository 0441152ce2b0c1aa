use strum::Display;

use crate::generator::ast::FieldRole;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub fields_extracted: usize,
  pub required_fields: usize,
  pub optional_fields: usize,
  pub defaulted_fields: usize,
  pub identity_fields: usize,
  pub setters_generated: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_field(&mut self, role: &FieldRole) {
    self.fields_extracted += 1;
    match role {
      FieldRole::Identity => self.identity_fields += 1,
      FieldRole::Defaulted(_) => self.defaulted_fields += 1,
      FieldRole::Optional => self.optional_fields += 1,
      FieldRole::Required => self.required_fields += 1,
    }
  }

  pub fn record_fields<'a>(&mut self, roles: impl IntoIterator<Item = &'a FieldRole>) {
    for role in roles {
      self.record_field(role);
    }
  }

  pub fn record_setters(&mut self, count: usize) {
    self.setters_generated += count;
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }

  /// Folds the stats of another builder into this running total.
  pub fn merge(&mut self, other: GenerationStats) {
    self.fields_extracted += other.fields_extracted;
    self.required_fields += other.required_fields;
    self.optional_fields += other.optional_fields;
    self.defaulted_fields += other.defaulted_fields;
    self.identity_fields += other.identity_fields;
    self.setters_generated += other.setters_generated;
    self.warnings.extend(other.warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Skipped member '{member}' of '{type_name}': {reason}")]
  SkippedMember {
    type_name: String,
    member: String,
    reason: SkipReason,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SkipReason {
  #[strum(to_string = "no simple identifier")]
  MissingName,
  #[strum(to_string = "no explicit type annotation")]
  MissingType,
}
