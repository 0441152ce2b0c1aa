use std::{ffi::OsStr, path::Path};

use anyhow::{Context, bail};
use builder_gen::{Declaration, GenerationConfig, GenerationMode, Visibility, source};
use syn::DeriveInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
  #[default]
  Rust,
  Json,
}

impl SourceFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "json" => Self::Json,
      _ => Self::Rust,
    }
  }
}

/// A declaration read from an input file.
#[derive(Debug, Clone)]
pub struct SourceDeclaration {
  pub declaration: Declaration,
  /// Builder derives found on the item, in attribute order.
  pub derives: Vec<GenerationMode>,
  /// The parsed item for Rust input, `None` for JSON.
  pub item: Option<DeriveInput>,
  /// Inline modules enclosing a Rust item, outermost first.
  pub module_path: Vec<String>,
}

impl SourceDeclaration {
  pub fn name(&self) -> &str {
    self.declaration.name.as_deref().unwrap_or("<unnamed>")
  }

  pub fn qualified_name(&self) -> String {
    if self.module_path.is_empty() {
      self.name().to_string()
    } else {
      format!("{}::{}", self.module_path.join("::"), self.name())
    }
  }

  /// `--type` accepts the bare name or the module-qualified one.
  pub fn matches_name(&self, name: &str) -> bool {
    self.name() == name || self.qualified_name() == name
  }

  /// Applies the item's own `#[builder(..)]` overrides on top of `base`.
  pub fn config(&self, base: &GenerationConfig) -> anyhow::Result<GenerationConfig> {
    let Some(item) = &self.item else {
      return Ok(base.clone());
    };
    source::generation_config(&item.attrs, base.clone())
      .with_context(|| format!("invalid #[builder] attribute on `{}`", self.name()))
  }

  /// Visibility of the Rust item; JSON declarations have none.
  pub fn visibility(&self) -> Option<Visibility> {
    self.item.as_ref().map(|item| source::visibility_of(&item.vis))
  }

  /// Generated builders name their target without a module path, so nested items cannot be targets.
  pub fn ensure_supported(&self) -> anyhow::Result<()> {
    if !self.module_path.is_empty() {
      bail!(
        "`{}` is declared inside `mod {}`: builders can only be generated for top-level items; derive the builder in place instead",
        self.qualified_name(),
        self.module_path.join("::")
      );
    }
    if let Some(item) = &self.item
      && self.declaration.kind.is_record()
    {
      source::ensure_not_generic(item).with_context(|| format!("cannot generate a builder for `{}`", self.name()))?;
    }
    Ok(())
  }
}

pub struct SourceLoader {
  content: String,
  format: SourceFormat,
}

impl SourceLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(SourceFormat::default(), SourceFormat::from_extension);

    let content = tokio::fs::read_to_string(path)
      .await
      .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(Self::from_content(content, format))
  }

  pub fn from_content(content: impl Into<String>, format: SourceFormat) -> Self {
    Self {
      content: content.into(),
      format,
    }
  }

  pub const fn format(&self) -> SourceFormat {
    self.format
  }

  pub fn parse(&self) -> anyhow::Result<Vec<SourceDeclaration>> {
    match self.format {
      SourceFormat::Rust => parse_rust(&self.content),
      SourceFormat::Json => parse_json(&self.content),
    }
  }
}

fn parse_rust(content: &str) -> anyhow::Result<Vec<SourceDeclaration>> {
  let file = syn::parse_file(content).context("failed to parse Rust source")?;

  source::source_items(&file)
    .into_iter()
    .map(|found| {
      let name = found.qualified_name();
      let declaration =
        source::declaration_from_derive(&found.input).with_context(|| format!("failed to read `{name}`"))?;
      let derives =
        source::builder_derives(&found.input.attrs).with_context(|| format!("failed to read derives of `{name}`"))?;
      Ok(SourceDeclaration {
        declaration,
        derives,
        item: Some(found.input),
        module_path: found.module_path,
      })
    })
    .collect()
}

/// Accepts a single declaration object or an array of them.
fn parse_json(content: &str) -> anyhow::Result<Vec<SourceDeclaration>> {
  let value: serde_json::Value = serde_json::from_str(content).context("failed to parse JSON declarations")?;
  let declarations = if value.is_array() {
    serde_json::from_value::<Vec<Declaration>>(value)?
  } else {
    vec![serde_json::from_value::<Declaration>(value)?]
  };

  Ok(
    declarations
      .into_iter()
      .map(|declaration| SourceDeclaration {
        declaration,
        derives: Vec::new(),
        item: None,
        module_path: Vec::new(),
      })
      .collect(),
  )
}
