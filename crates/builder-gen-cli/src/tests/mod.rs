use clap::Parser;

use crate::{
  ui::{Cli, Commands, commands::GenerateConfig},
  utils::{SourceDeclaration, SourceFormat, SourceLoader},
};


const USERS_RS: &str = r#"
use uuid::Uuid;

#[derive(Debug, Clone, Builder)]
pub struct User {
  pub uuid: Uuid,
  pub name: String,
  pub age: Option<String>,
}

#[derive(Debug, Clone, builder_gen_macros::ThrowingBuilder)]
pub(crate) struct Account {
  pub(crate) owner: String,
  #[builder(default)]
  pub(crate) balance: u64,
}

#[derive(Debug, Clone)]
struct Settings {
  theme: String,
  font_size: Option<u8>,
}

pub enum Shape {
  Circle,
  Square,
}

#[derive(FluentBuilder)]
#[builder(identity = "key", generator = crate::keys::next)]
pub struct Entry {
  pub key: u64,
  pub value: Vec<u8>,
}

mod storage {
  pub struct Record {
    pub id: u64,
  }
}
"#;

const DECLARATIONS_JSON: &str = r#"[
  {
    "kind": "struct",
    "name": "Point",
    "members": [
      { "member": "variable", "bindings": [{ "pattern": { "identifier": "x" }, "declared_type": "f64" }] },
      { "member": "variable", "bindings": [{ "pattern": { "identifier": "y" }, "declared_type": "f64" }] },
      {
        "member": "variable",
        "bindings": [{ "pattern": { "identifier": "length" }, "declared_type": "f64", "accessors": "getter" }]
      }
    ]
  },
  { "kind": "union", "name": "Bits", "members": [] }
]"#;

fn rust_sources() -> Vec<SourceDeclaration> {
  SourceLoader::from_content(USERS_RS, SourceFormat::Rust)
    .parse()
    .expect("fixture parses")
}

fn json_sources() -> Vec<SourceDeclaration> {
  SourceLoader::from_content(DECLARATIONS_JSON, SourceFormat::Json)
    .parse()
    .expect("fixture parses")
}

fn generate_config(args: &[&str]) -> anyhow::Result<GenerateConfig> {
  let cli = Cli::try_parse_from(["builder-gen", "generate"].iter().chain(args))?;
  let Commands::Generate(command) = cli.command else {
    anyhow::bail!("expected the generate subcommand");
  };
  GenerateConfig::from_command(command)
}
