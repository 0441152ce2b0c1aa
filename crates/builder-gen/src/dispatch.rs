//! Entry points, one per builder flavour.

use crate::{
  decl::Declaration,
  diagnostics::{Diagnostic, diagnose},
  error::GenerateError,
  generator::{
    codegen::BuilderDeclaration, config::GenerationConfig, extractor::extract, metrics::GenerationStats,
    mode::GenerationMode,
  },
};

#[derive(Debug, Clone)]
pub enum Expansion {
  Generated(GeneratedBuilder),
  /// The target is a fixable misuse; nothing was generated.
  Diagnosed(Diagnostic),
}

impl Expansion {
  #[must_use]
  pub fn generated(self) -> Option<GeneratedBuilder> {
    match self {
      Self::Generated(generated) => Some(generated),
      Self::Diagnosed(_) => None,
    }
  }
}

#[derive(Debug, Clone)]
pub struct GeneratedBuilder {
  pub target: String,
  pub mode: GenerationMode,
  pub declaration: BuilderDeclaration,
  pub stats: GenerationStats,
}

pub fn builder(declaration: &Declaration, config: &GenerationConfig) -> Result<Expansion, GenerateError> {
  expand(declaration, GenerationMode::Plain, config)
}

pub fn throwing_builder(declaration: &Declaration, config: &GenerationConfig) -> Result<Expansion, GenerateError> {
  expand(declaration, GenerationMode::Throwing, config)
}

pub fn fluent_builder(declaration: &Declaration, config: &GenerationConfig) -> Result<Expansion, GenerateError> {
  expand(declaration, GenerationMode::Fluent, config)
}

pub fn expand(
  declaration: &Declaration,
  mode: GenerationMode,
  config: &GenerationConfig,
) -> Result<Expansion, GenerateError> {
  if !declaration.kind.is_record() {
    return match diagnose(declaration) {
      Some(diagnostic) => Ok(Expansion::Diagnosed(diagnostic)),
      None => Err(GenerateError::WrongDeclarationKind {
        kind: declaration.kind,
      }),
    };
  }

  let target = declaration.name.as_deref().ok_or(GenerateError::MissingDeclarationName)?;
  let extraction = extract(declaration)?;
  let strategy = mode.strategy();
  let declaration = strategy.synthesize(target, &extraction.fields, config)?;

  let mut stats = GenerationStats::default();
  let roles = extraction
    .fields
    .iter()
    .map(|field| field.role(&config.identity))
    .collect::<Vec<_>>();
  stats.record_fields(&roles);
  if mode == GenerationMode::Fluent {
    stats.record_setters(extraction.fields.len());
  }
  stats.record_warnings(extraction.warnings);

  Ok(Expansion::Generated(GeneratedBuilder {
    target: target.to_string(),
    mode,
    declaration,
    stats,
  }))
}
