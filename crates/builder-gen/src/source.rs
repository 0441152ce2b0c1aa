//! Lowering of `syn` items into the [`Declaration`] view.
//!
//! Recognised helper attributes:
//!
//! - field: `#[builder(default)]`, `#[builder(default = <expr>)]`
//! - struct: `#[builder(identity = "field", generator = path::to::fn)]`

use quote::ToTokens;
use syn::{
  Attribute, Data, DeriveInput, Fields, FieldsNamed, Item, LitStr, Token, punctuated::Punctuated, spanned::Spanned,
};

use crate::{
  decl::{Binding, DeclKind, Declaration, DefaultValue, InitParam, Initializer, Member, Pattern, VariableDecl},
  generator::{ast::types::type_text, codegen::Visibility, config::GenerationConfig, mode::GenerationMode},
};

const BUILDER_ATTR: &str = "builder";

pub fn declaration_from_derive(input: &DeriveInput) -> syn::Result<Declaration> {
  let (kind, members, initializer) = match &input.data {
    Data::Struct(data) => match &data.fields {
      Fields::Named(named) => {
        let (members, initializer) = lower_named_fields(named)?;
        (DeclKind::Struct, members, Some(initializer))
      }
      Fields::Unnamed(unnamed) => {
        let members = unnamed
          .unnamed
          .iter()
          .enumerate()
          .map(|(index, field)| {
            Member::Variable(VariableDecl {
              bindings: vec![Binding {
                pattern: Pattern::Other(index.to_string()),
                declared_type: Some(type_text(&field.ty)),
                accessors: None,
              }],
            })
          })
          .collect();
        (DeclKind::TupleStruct, members, None)
      }
      Fields::Unit => (DeclKind::Struct, Vec::new(), Some(Initializer::default())),
    },
    Data::Enum(data) => {
      let members = data
        .variants
        .iter()
        .map(|variant| Member::NestedType {
          name: variant.ident.to_string(),
        })
        .collect();
      (DeclKind::Enum, members, None)
    }
    Data::Union(data) => {
      let (members, _) = lower_named_fields(&data.fields)?;
      (DeclKind::Union, members, None)
    }
  };

  Ok(Declaration {
    kind,
    name: Some(input.ident.to_string()),
    members,
    initializer,
  })
}

fn lower_named_fields(fields: &FieldsNamed) -> syn::Result<(Vec<Member>, Initializer)> {
  let mut members = Vec::with_capacity(fields.named.len());
  let mut params = Vec::with_capacity(fields.named.len());

  for field in &fields.named {
    let Some(ident) = &field.ident else {
      continue;
    };
    let name = ident.to_string();
    members.push(Member::stored(name.clone(), type_text(&field.ty)));
    params.push(InitParam {
      default: field_default(&field.attrs)?,
      name,
    });
  }

  Ok((members, Initializer { params }))
}

fn field_default(attrs: &[Attribute]) -> syn::Result<Option<DefaultValue>> {
  let mut default = None;

  for attr in attrs.iter().filter(|attr| attr.path().is_ident(BUILDER_ATTR)) {
    attr.parse_nested_meta(|meta| {
      if meta.path.is_ident("default") {
        if meta.input.peek(Token![=]) {
          let expr: syn::Expr = meta.value()?.parse()?;
          default = Some(DefaultValue::Expr(expr.to_token_stream().to_string()));
        } else {
          default = Some(DefaultValue::Implicit);
        }
        return Ok(());
      }
      Err(meta.error("unsupported builder field attribute, expected `default` or `default = <expr>`"))
    })?;
  }

  Ok(default)
}

/// Applies struct-level `#[builder(..)]` overrides on top of `base`.
pub fn generation_config(attrs: &[Attribute], base: GenerationConfig) -> syn::Result<GenerationConfig> {
  let mut config = base;

  for attr in attrs.iter().filter(|attr| attr.path().is_ident(BUILDER_ATTR)) {
    attr.parse_nested_meta(|meta| {
      if meta.path.is_ident("identity") {
        let field: LitStr = meta.value()?.parse()?;
        config.identity.field_name = field.value();
        return Ok(());
      }
      if meta.path.is_ident("generator") {
        let generator: syn::Path = meta.value()?.parse()?;
        config.identity.generator = generator.to_token_stream().to_string().replace(' ', "");
        return Ok(());
      }
      Err(meta.error("unsupported builder attribute, expected `identity = \"..\"` or `generator = path`"))
    })?;
  }

  Ok(config)
}

pub fn visibility_of(vis: &syn::Visibility) -> Visibility {
  match vis {
    syn::Visibility::Public(_) => Visibility::Public,
    syn::Visibility::Restricted(_) => Visibility::Crate,
    syn::Visibility::Inherited => Visibility::File,
  }
}

/// Builder flavours requested through `#[derive(..)]`, in attribute order.
pub fn builder_derives(attrs: &[Attribute]) -> syn::Result<Vec<GenerationMode>> {
  let mut modes = Vec::new();

  for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
    let paths = attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)?;
    modes.extend(
      paths
        .iter()
        .filter_map(|path| path.segments.last())
        .filter_map(|segment| GenerationMode::from_derive_name(&segment.ident.to_string())),
    );
  }

  Ok(modes)
}

/// Generic records are out of reach for the synthesizer.
pub fn ensure_not_generic(input: &DeriveInput) -> syn::Result<()> {
  if input.generics.params.is_empty() && input.generics.where_clause.is_none() {
    Ok(())
  } else {
    Err(syn::Error::new(
      input.generics.span(),
      "builder derives do not support generic types",
    ))
  }
}

/// A struct, enum or union of a parsed file and the inline modules enclosing it.
#[derive(Debug, Clone)]
pub struct SourceItem {
  /// Outermost first; empty for top-level items.
  pub module_path: Vec<String>,
  pub input: DeriveInput,
}

impl SourceItem {
  #[must_use]
  pub fn is_nested(&self) -> bool {
    !self.module_path.is_empty()
  }

  /// `storage::Entry` for an item inside `mod storage`.
  #[must_use]
  pub fn qualified_name(&self) -> String {
    let mut segments = self.module_path.clone();
    segments.push(self.input.ident.to_string());
    segments.join("::")
  }
}

/// Structs, enums and unions of a parsed file in source order, descending into inline modules.
pub fn source_items(file: &syn::File) -> Vec<SourceItem> {
  let mut found = Vec::new();
  collect_items(&file.items, &mut Vec::new(), &mut found);
  found
}

fn collect_items(items: &[Item], module_path: &mut Vec<String>, found: &mut Vec<SourceItem>) {
  for item in items {
    let input: DeriveInput = match item {
      Item::Struct(item) => item.clone().into(),
      Item::Enum(item) => item.clone().into(),
      Item::Union(item) => item.clone().into(),
      Item::Mod(module) => {
        if let Some((_, nested)) = &module.content {
          module_path.push(module.ident.to_string());
          collect_items(nested, module_path, found);
          module_path.pop();
        }
        continue;
      }
      _ => continue,
    };
    found.push(SourceItem {
      module_path: module_path.clone(),
      input,
    });
  }
}
