use std::path::Path;

use builder_gen::{DeclKind, GenerationConfig, extract};
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::{
  ui::{Colors, colors::comfy, term_width},
  utils::{SourceDeclaration, SourceLoader},
};

/// One row of the `list` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSummary {
  pub name: String,
  pub kind: DeclKind,
  /// `None` for declarations a builder cannot target.
  pub fields: Option<usize>,
  pub required: Option<usize>,
  pub derives: Vec<&'static str>,
}

impl DeclarationSummary {
  pub fn from_source(source: &SourceDeclaration) -> Self {
    let identity = source
      .config(&GenerationConfig::default())
      .map(|config| config.identity)
      .unwrap_or_default();
    let fields = source
      .declaration
      .kind
      .is_record()
      .then(|| extract(&source.declaration).ok())
      .flatten()
      .map(|extraction| extraction.fields);

    Self {
      name: source.qualified_name(),
      kind: source.declaration.kind,
      required: fields
        .as_ref()
        .map(|fields| fields.iter().filter(|field| field.is_required(&identity)).count()),
      fields: fields.as_ref().map(Vec::len),
      derives: source.derives.iter().map(|mode| mode.derive_name()).collect(),
    }
  }
}

fn count_cell(count: Option<usize>) -> String {
  count.map_or_else(|| "-".to_string(), |count| count.to_string())
}

pub async fn list_declarations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let sources = SourceLoader::open(input).await?.parse()?;
  let summaries = sources.iter().map(DeclarationSummary::from_source).collect_vec();

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["TYPE", "KIND", "FIELDS", "REQUIRED", "DERIVES"] {
    header.add_cell(Cell::new(title).fg(comfy(colors.label())));
  }
  table.set_header(header);

  for summary in summaries {
    let derives = if summary.derives.is_empty() {
      "-".to_string()
    } else {
      summary.derives.join(", ")
    };

    let mut row = Row::new();
    row.add_cell(
      Cell::new(&summary.name)
        .fg(comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(summary.kind).fg(comfy(colors.info())));
    row.add_cell(
      Cell::new(count_cell(summary.fields))
        .fg(comfy(colors.primary()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(count_cell(summary.required))
        .fg(comfy(colors.primary()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(derives).fg(comfy(colors.accent())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
