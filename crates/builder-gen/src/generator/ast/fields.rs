use crate::{
  decl::DefaultValue,
  generator::{ast::types, config::IdentityPolicy},
};

/// One stored member of a record, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, bon::Builder)]
pub struct TypedField {
  #[builder(into)]
  pub name: String,
  /// Type text as written, including any `Option<..>` wrapper.
  #[builder(into)]
  pub declared_type: String,
  pub default: Option<DefaultValue>,
}

impl TypedField {
  pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      declared_type: declared_type.into(),
      default: None,
    }
  }

  #[must_use]
  pub fn with_default(mut self, default: DefaultValue) -> Self {
    self.default = Some(default);
    self
  }

  #[must_use]
  pub fn has_default_value(&self) -> bool {
    self.default.is_some()
  }

  /// True when the declared type is `Option<..>`. Unparseable types are never optional.
  #[must_use]
  pub fn is_optional(&self) -> bool {
    syn::parse_str::<syn::Type>(&self.declared_type).is_ok_and(|ty| types::option_inner(&ty).is_some())
  }

  #[must_use]
  pub fn is_identity_field(&self, policy: &IdentityPolicy) -> bool {
    policy.matches(&self.name)
  }

  #[must_use]
  pub fn is_required(&self, policy: &IdentityPolicy) -> bool {
    self.role(policy) == FieldRole::Required
  }

  /// How the field is assembled at build time.
  ///
  /// Identity wins over a declared default, a default wins over optionality.
  #[must_use]
  pub fn role(&self, policy: &IdentityPolicy) -> FieldRole {
    if self.is_identity_field(policy) {
      FieldRole::Identity
    } else if let Some(default) = &self.default {
      FieldRole::Defaulted(default.clone())
    } else if self.is_optional() {
      FieldRole::Optional
    } else {
      FieldRole::Required
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldRole {
  Identity,
  Defaulted(DefaultValue),
  Optional,
  Required,
}
