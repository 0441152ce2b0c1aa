use std::path::PathBuf;

use anyhow::{Context, bail};
use builder_gen::{
  Expansion, GeneratedBuilder, GenerationConfig, GenerationMode, GenerationStats, IdentityPolicy, Visibility,
  dispatch, format,
};
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use itertools::Itertools;
use tokio::io::AsyncWriteExt;

use crate::{
  ui::{Colors, GenerateCommand},
  utils::{SourceDeclaration, SourceFormat, SourceLoader},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  /// Mode for types named with `--type` that carry no builder derive.
  pub mode: GenerationMode,
  pub input: PathBuf,
  /// `None` writes to stdout.
  pub output: Option<PathBuf>,
  pub types: Vec<String>,
  /// Overrides the visibility read from Rust items when set.
  pub visibility: Option<Visibility>,
  pub generation: GenerationConfig,
  pub verbose: bool,
  pub quiet: bool,
}

/// One builder to generate.
#[derive(Debug, Clone, Copy)]
pub struct GenerationTarget<'a> {
  pub source: &'a SourceDeclaration,
  pub mode: GenerationMode,
}

/// Formatted output for a whole input file.
#[derive(Debug, Clone)]
pub struct GeneratedSource {
  pub code: String,
  pub builders: Vec<(String, GenerationMode)>,
  pub stats: GenerationStats,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      mode,
      input,
      output,
      types,
      visibility,
      identity_field,
      identity_generator,
      verbose,
      quiet,
    } = command;

    let visibility = visibility
      .map(|visibility| {
        Visibility::parse(&visibility)
          .ok_or_else(|| anyhow::anyhow!("Invalid visibility '{visibility}': expected one of public, crate, file"))
      })
      .transpose()?;
    if identity_field.trim().is_empty() {
      bail!("Identity field name (--identity-field) must not be empty");
    }

    Ok(Self {
      mode: mode.into(),
      input,
      output,
      types: types.unwrap_or_default().into_iter().unique().collect(),
      generation: GenerationConfig::builder()
        .visibility(visibility.unwrap_or_default())
        .identity(IdentityPolicy::new(identity_field, identity_generator))
        .build(),
      visibility,
      verbose,
      quiet,
    })
  }

  /// Items with a builder derive use the derive's mode. Items named with `--type` use `--mode`.
  /// JSON declarations carry no derives, so without `--type` every one of them is a target.
  pub fn select_targets<'a>(
    &self,
    sources: &'a [SourceDeclaration],
    source_format: SourceFormat,
  ) -> anyhow::Result<Vec<GenerationTarget<'a>>> {
    if let Some(missing) = self.types.iter().find(|name| !sources.iter().any(|source| source.matches_name(name))) {
      bail!("Type `{missing}` not found in {}", self.input.display());
    }

    let select_all = source_format == SourceFormat::Json && self.types.is_empty();
    let mut targets = Vec::new();

    for source in sources {
      match source.derives.as_slice() {
        [] => {
          if select_all || self.types.iter().any(|name| source.matches_name(name)) {
            targets.push(GenerationTarget {
              source,
              mode: self.mode,
            });
          }
        }
        [mode] => targets.push(GenerationTarget { source, mode: *mode }),
        modes => bail!(
          "`{}` derives more than one builder ({}); a type can only have one",
          source.qualified_name(),
          modes.iter().map(|mode| mode.derive_name()).join(", ")
        ),
      }
    }

    if targets.is_empty() {
      bail!(
        "No builder targets in {}: add a builder derive or pass --type",
        self.input.display()
      );
    }

    Ok(targets)
  }

  pub fn expand_target(&self, target: GenerationTarget<'_>) -> anyhow::Result<GeneratedBuilder> {
    let source = target.source;
    source.ensure_supported()?;
    let mut config = source.config(&self.generation)?;
    if let Some(visibility) = self.visibility.or_else(|| source.visibility()) {
      config.visibility = visibility;
    }

    let expansion = dispatch::expand(&source.declaration, target.mode, &config)
      .with_context(|| format!("failed to generate {} builder for `{}`", target.mode, source.name()))?;

    match expansion {
      Expansion::Generated(generated) => Ok(generated),
      Expansion::Diagnosed(diagnostic) => bail!("`{}`: {diagnostic}", source.qualified_name()),
    }
  }

  pub fn generate_source(
    &self,
    sources: &[SourceDeclaration],
    source_format: SourceFormat,
  ) -> anyhow::Result<GeneratedSource> {
    let targets = self.select_targets(sources, source_format)?;

    let mut sections = Vec::with_capacity(targets.len());
    let mut builders = Vec::with_capacity(targets.len());
    let mut stats = GenerationStats::default();

    for target in targets {
      let generated = self.expand_target(target)?;
      sections.push(generated.declaration.to_formatted_string()?);
      builders.push((generated.target, generated.mode));
      stats.merge(generated.stats);
    }

    let source_path = self.input.display().to_string();
    Ok(GeneratedSource {
      code: format::with_header(&sections.join("\n"), &source_path),
      builders,
      stats,
    })
  }

  async fn write_output(&self, code: &str) -> anyhow::Result<()> {
    match &self.output {
      Some(path) => {
        if let Some(parent) = path.parent() {
          tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, code)
          .await
          .with_context(|| format!("failed to write {}", path.display()))?;
      }
      None => {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(code.as_bytes()).await?;
        stdout.flush().await?;
      }
    }
    Ok(())
  }
}

/// Progress output. Goes to stderr when the generated code itself goes to stdout.
struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn emit(&self, line: &str) {
    if self.config.output.is_some() {
      println!("{line}");
    } else {
      eprintln!("{line}");
    }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      self.emit(&format!("{} {message}", format_timestamp().with(self.colors.timestamp())));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      self.emit(&format!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      ));
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading declarations from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating builders...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, output: &GeneratedSource) {
    if self.config.quiet {
      return;
    }

    let stats = &output.stats;
    self.stat("Builders generated:", output.builders.len().to_string());
    if self.config.verbose {
      for (target, mode) in &output.builders {
        self.stat("", format!("{target}Builder ({mode})"));
      }
    }
    self.stat("Fields extracted:", stats.fields_extracted.to_string());
    self.stat("", format!("{} required", stats.required_fields));
    self.stat("", format!("{} optional", stats.optional_fields));
    if stats.defaulted_fields > 0 {
      self.stat("", format!("{} defaulted", stats.defaulted_fields));
    }
    if stats.identity_fields > 0 {
      self.stat("", format!("{} identity", stats.identity_fields));
    }
    if stats.setters_generated > 0 {
      self.stat("Setters generated:", stats.setters_generated.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || self.config.quiet {
      return;
    }

    eprintln!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    let destination = self
      .config
      .output
      .as_ref()
      .map_or_else(|| "stdout".to_string(), |path| path.display().to_string());
    self.info(
      &format!("Writing to: {destination}")
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      self.emit("");
      self.emit(&format!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated builders".with(self.colors.success())
      ));
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let loader = SourceLoader::open(&config.input).await?;
  let sources = loader.parse()?;

  logger.log_generating();
  let output = config.generate_source(&sources, loader.format())?;
  logger.print_statistics(&output);

  logger.log_writing();
  config.write_output(&output.code).await?;
  logger.log_success();

  Ok(())
}
