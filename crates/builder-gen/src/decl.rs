//! Read-only view of a record declaration as handed over by the parser.
//!
//! The view is deliberately host-neutral: a Rust front-end lowers `syn` items into it
//! (see [`crate::source`]) and other hosts can ship it as JSON.

use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeclKind {
  Struct,
  TupleStruct,
  Enum,
  Union,
}

impl DeclKind {
  /// Only structs with named fields have a memberwise construction a builder can target.
  #[must_use]
  pub const fn is_record(self) -> bool {
    matches!(self, Self::Struct)
  }

  #[must_use]
  pub const fn keyword(self) -> &'static str {
    match self {
      Self::Struct | Self::TupleStruct => "struct",
      Self::Enum => "enum",
      Self::Union => "union",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct Declaration {
  pub kind: DeclKind,
  #[builder(into)]
  pub name: Option<String>,
  #[serde(default)]
  #[builder(default)]
  pub members: Vec<Member>,
  #[serde(default)]
  pub initializer: Option<Initializer>,
}

impl Declaration {
  pub fn variables(&self) -> impl Iterator<Item = &VariableDecl> {
    self.members.iter().filter_map(Member::as_variable)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
  Variable(VariableDecl),
  Function { name: String },
  NestedType { name: String },
}

impl Member {
  /// A plain stored field: single identifier binding, explicit type, no accessors.
  pub fn stored(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
    Self::Variable(VariableDecl {
      bindings: vec![Binding {
        pattern: Pattern::Identifier(name.into()),
        declared_type: Some(declared_type.into()),
        accessors: None,
      }],
    })
  }

  pub fn observed(name: impl Into<String>, declared_type: impl Into<String>, hooks: Vec<AccessorKind>) -> Self {
    Self::Variable(VariableDecl {
      bindings: vec![Binding {
        pattern: Pattern::Identifier(name.into()),
        declared_type: Some(declared_type.into()),
        accessors: Some(AccessorBlock::Accessors(hooks)),
      }],
    })
  }

  pub fn computed(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
    Self::Variable(VariableDecl {
      bindings: vec![Binding {
        pattern: Pattern::Identifier(name.into()),
        declared_type: Some(declared_type.into()),
        accessors: Some(AccessorBlock::Getter),
      }],
    })
  }

  #[must_use]
  pub fn as_variable(&self) -> Option<&VariableDecl> {
    match self {
      Self::Variable(variable) => Some(variable),
      Self::Function { .. } | Self::NestedType { .. } => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDecl {
  pub bindings: Vec<Binding>,
}

impl VariableDecl {
  /// Syntactic storage check.
  ///
  /// A variable is stored when it declares exactly one binding and either carries no
  /// accessor block or only observer hooks. Any getter makes it computed.
  #[must_use]
  pub fn is_stored(&self) -> bool {
    let [binding] = self.bindings.as_slice() else {
      return false;
    };

    match &binding.accessors {
      None => true,
      Some(AccessorBlock::Getter) => false,
      Some(AccessorBlock::Accessors(kinds)) => kinds.iter().all(|kind| kind.is_observer()),
    }
  }

  #[must_use]
  pub fn binding(&self) -> Option<&Binding> {
    self.bindings.first()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
  pub pattern: Pattern,
  #[serde(default)]
  pub declared_type: Option<String>,
  #[serde(default)]
  pub accessors: Option<AccessorBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
  Identifier(String),
  /// Destructuring or otherwise non-simple pattern, kept as written.
  Other(String),
}

impl Pattern {
  #[must_use]
  pub fn identifier(&self) -> Option<&str> {
    match self {
      Self::Identifier(name) if !name.is_empty() => Some(name),
      Self::Identifier(_) | Self::Other(_) => None,
    }
  }

  #[must_use]
  pub fn as_written(&self) -> &str {
    match self {
      Self::Identifier(text) | Self::Other(text) => text,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorBlock {
  /// Shorthand getter body, always computed.
  Getter,
  Accessors(Vec<AccessorKind>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AccessorKind {
  Get,
  Set,
  WillSet,
  DidSet,
  Modify,
  Read,
}

impl AccessorKind {
  #[must_use]
  pub const fn is_observer(self) -> bool {
    matches!(self, Self::WillSet | Self::DidSet)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initializer {
  #[serde(default)]
  pub params: Vec<InitParam>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitParam {
  pub name: String,
  #[serde(default)]
  pub default: Option<DefaultValue>,
}

impl InitParam {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      default: None,
    }
  }

  pub fn defaulted(name: impl Into<String>, default: DefaultValue) -> Self {
    Self {
      name: name.into(),
      default: Some(default),
    }
  }
}

/// Default carried by a memberwise initializer parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
  /// `Default::default()` of the field type.
  Implicit,
  /// Explicit default expression, as written.
  Expr(String),
}
