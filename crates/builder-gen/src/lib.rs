//! Builder synthesis for Rust record structs.
//!
//! The pipeline takes a [`Declaration`] (either lowered from `syn` via [`source`] or
//! deserialized from JSON), extracts its stored fields, and synthesizes a companion
//! `{Type}Builder` in one of three flavours:
//!
//! - [`GenerationMode::Plain`]: `build()` returns `Option<T>`
//! - [`GenerationMode::Throwing`]: `build()` returns `Result<T, {Type}BuilderError>`
//! - [`GenerationMode::Fluent`]: like plain, plus chaining setters per field
//!
//! ```no_run
//! use builder_gen::{Declaration, DeclKind, Expansion, GenerationConfig, Member, dispatch};
//!
//! # fn example() -> Result<(), builder_gen::GenerateError> {
//! let declaration = Declaration::builder()
//!   .kind(DeclKind::Struct)
//!   .name("User")
//!   .members(vec![
//!     Member::stored("uuid", "Uuid"),
//!     Member::stored("name", "String"),
//!     Member::stored("age", "Option<String>"),
//!   ])
//!   .build();
//!
//! if let Expansion::Generated(generated) = dispatch::builder(&declaration, &GenerationConfig::default())? {
//!   println!("{}", generated.declaration.to_formatted_string()?);
//! }
//! # Ok(())
//! # }
//! ```
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod decl;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod generator;
pub mod source;

#[cfg(test)]
mod tests;

pub use decl::{
  AccessorBlock, AccessorKind, Binding, DeclKind, Declaration, DefaultValue, InitParam, Initializer, Member, Pattern,
  VariableDecl,
};
pub use diagnostics::{Diagnostic, FixIt, Severity, diagnose};
pub use dispatch::{Expansion, GeneratedBuilder};
pub use error::GenerateError;
pub use generator::{
  ast::{FieldRole, TypedField},
  codegen::{BuilderDeclaration, DeclFragment, Visibility},
  config::{GenerationConfig, IdentityPolicy},
  extractor::{Extraction, extract},
  metrics::{GenerationStats, GenerationWarning, SkipReason},
  mode::{FluentStrategy, GenerationMode, GenerationStrategy, PlainStrategy, ThrowingStrategy},
};
