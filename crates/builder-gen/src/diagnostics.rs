//! Misuse diagnosis for non-record targets.
//!
//! When a builder is requested for something other than a struct with named fields,
//! dispatch asks [`diagnose`] whether the mistake has a mechanical fix. A diagnostic
//! aborts the expansion without generated code; no diagnostic turns into
//! [`crate::GenerateError::WrongDeclarationKind`].

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

use crate::decl::{DeclKind, Declaration};

pub const DIAGNOSTIC_DOMAIN: &str = "builder-gen";
pub const WRONG_DECLARATION_KEYWORD: &str = "WrongDeclarationKeyword";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, StrumDisplay)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
  pub id: String,
  pub message: String,
  pub severity: Severity,
  pub fix_its: Vec<FixIt>,
}

/// Suggested rewrite: replace the token `old` with `new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixIt {
  pub message: String,
  pub old: String,
  pub new: String,
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.message)?;
    for fix_it in &self.fix_its {
      write!(f, "\nhelp: {}: `{}` -> `{}`", fix_it.message, fix_it.old, fix_it.new)?;
    }
    Ok(())
  }
}

pub fn diagnose(declaration: &Declaration) -> Option<Diagnostic> {
  let (old, new) = struct_conversion(declaration)?;

  Some(Diagnostic {
    id: format!("{DIAGNOSTIC_DOMAIN}.{WRONG_DECLARATION_KEYWORD}"),
    message: "builder derives only work on structs".to_string(),
    severity: Severity::Error,
    fix_its: vec![FixIt {
      message: "replace with 'struct'".to_string(),
      old: old.to_string(),
      new: new.to_string(),
    }],
  })
}

/// Only a keyword swap is offered: a union already has named fields, so turning it
/// into a struct leaves a valid record. Enums and tuple structs need real rework.
fn struct_conversion(declaration: &Declaration) -> Option<(&'static str, &'static str)> {
  match declaration.kind {
    DeclKind::Union => Some((DeclKind::Union.keyword(), DeclKind::Struct.keyword())),
    DeclKind::Struct | DeclKind::TupleStruct | DeclKind::Enum => None,
  }
}
