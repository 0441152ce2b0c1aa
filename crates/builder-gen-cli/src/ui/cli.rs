use std::path::PathBuf;

use builder_gen::{
  GenerationMode,
  generator::config::{DEFAULT_IDENTITY_FIELD, DEFAULT_IDENTITY_GENERATOR},
};
use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "builder-gen")]
#[command(author, version, about = "Builder type generator for Rust record structs")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List the declarations found in a Rust source or JSON declaration file
  List {
    /// Path to a `.rs` source file or `.json` declaration file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
  /// Generate builder types for record structs
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Builder flavour for types selected with --type
  #[arg(short, long, value_enum, default_value = "plain")]
  pub mode: BuilderMode,

  /// Path to a `.rs` source file or `.json` declaration file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the generated Rust code will be written (stdout when omitted)
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Generate builders for these types (comma-separated), in addition to derive-annotated ones
  #[arg(short = 't', long = "type", value_name = "TYPES", value_delimiter = ',')]
  pub types: Option<Vec<String>>,

  /// Visibility level for generated builders (public, crate, file); defaults to each item's own visibility
  #[arg(long, value_name = "VISIBILITY")]
  pub visibility: Option<String>,

  /// Field filled from the identity generator when left unset
  #[arg(long, value_name = "NAME", default_value = DEFAULT_IDENTITY_FIELD)]
  pub identity_field: String,

  /// Zero-argument function producing identity values
  #[arg(long, value_name = "PATH", default_value = DEFAULT_IDENTITY_GENERATOR)]
  pub identity_generator: String,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuilderMode {
  Plain,
  Throwing,
  Fluent,
}

impl From<BuilderMode> for GenerationMode {
  fn from(mode: BuilderMode) -> Self {
    match mode {
      BuilderMode::Plain => Self::Plain,
      BuilderMode::Throwing => Self::Throwing,
      BuilderMode::Fluent => Self::Fluent,
    }
  }
}
