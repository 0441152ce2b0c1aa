use syn::{DeriveInput, parse_quote};

use crate::{
  decl::{DeclKind, DefaultValue, Member},
  dispatch::{self, Expansion},
  generator::{
    ast::TypedField,
    codegen::Visibility,
    config::{GenerationConfig, IdentityPolicy},
    extractor::extract,
    mode::GenerationMode,
  },
  source::{
    SourceItem, builder_derives, declaration_from_derive, ensure_not_generic, generation_config, source_items,
    visibility_of,
  },
};

#[test]
fn test_named_struct_lowering() {
  let input: DeriveInput = parse_quote! {
    pub struct User {
      pub uuid: Uuid,
      name: String,
      age: Option<String>,
      tags: std::collections::HashMap<String, Vec<u8>>,
    }
  };

  let declaration = declaration_from_derive(&input).expect("lowering");
  assert_eq!(declaration.kind, DeclKind::Struct);
  assert_eq!(declaration.name.as_deref(), Some("User"));
  assert_eq!(
    declaration.members,
    vec![
      Member::stored("uuid", "Uuid"),
      Member::stored("name", "String"),
      Member::stored("age", "Option<String>"),
      Member::stored("tags", "std::collections::HashMap<String, Vec<u8>>"),
    ]
  );
  assert!(declaration.initializer.is_some());
}

#[test]
fn test_field_defaults_from_attributes() {
  let input: DeriveInput = parse_quote! {
    struct Job {
      name: String,
      #[builder(default)]
      retries: u32,
      #[builder(default = String::from("idle"))]
      label: String,
    }
  };

  let fields = extract(&declaration_from_derive(&input).expect("lowering"))
    .expect("extract")
    .fields;
  assert_eq!(fields[0], TypedField::new("name", "String"));
  assert_eq!(fields[1].default, Some(DefaultValue::Implicit));
  let Some(DefaultValue::Expr(expr)) = &fields[2].default else {
    panic!("expected an explicit default, got {:?}", fields[2].default);
  };
  let parsed: syn::Expr = syn::parse_str(expr).expect("default expression re-parses");
  assert_eq!(parsed, parse_quote!(String::from("idle")));
}

#[test]
fn test_unknown_field_attribute_is_an_error() {
  let input: DeriveInput = parse_quote! {
    struct Job {
      #[builder(skip)]
      name: String,
    }
  };

  let error = declaration_from_derive(&input).expect_err("unknown key");
  assert!(error.to_string().contains("unsupported builder field attribute"));
}

#[test]
fn test_other_item_kinds() {
  let tuple: DeriveInput = parse_quote!(struct Pair(u8, u8););
  let unit: DeriveInput = parse_quote!(struct Marker;);
  let shape: DeriveInput = parse_quote!(enum Shape { Circle, Square });
  let bits: DeriveInput = parse_quote!(union Bits { raw: u32, float: f32 });

  let tuple = declaration_from_derive(&tuple).expect("tuple");
  assert_eq!(tuple.kind, DeclKind::TupleStruct);
  assert_eq!(tuple.variables().count(), 2);

  let unit = declaration_from_derive(&unit).expect("unit");
  assert_eq!(unit.kind, DeclKind::Struct);
  assert!(unit.members.is_empty());

  let shape = declaration_from_derive(&shape).expect("enum");
  assert_eq!(shape.kind, DeclKind::Enum);
  assert_eq!(shape.variables().count(), 0);

  let bits = declaration_from_derive(&bits).expect("union");
  assert_eq!(bits.kind, DeclKind::Union);
  assert_eq!(bits.variables().count(), 2);
}

#[test]
fn test_tuple_struct_fields_have_no_simple_name() {
  let input: DeriveInput = parse_quote!(struct Pair(u8, u8););
  let declaration = declaration_from_derive(&input).expect("tuple");

  assert!(declaration.variables().all(|variable| {
    variable
      .binding()
      .is_some_and(|binding| binding.pattern.identifier().is_none())
  }));
}

#[test]
fn test_union_source_is_diagnosed() {
  let input: DeriveInput = parse_quote!(union Bits { raw: u32 });
  let declaration = declaration_from_derive(&input).expect("union");

  let expansion = dispatch::builder(&declaration, &GenerationConfig::default()).expect("diagnosed");
  assert!(matches!(expansion, Expansion::Diagnosed(_)));
}

#[test]
fn test_struct_level_identity_override() {
  let input: DeriveInput = parse_quote! {
    #[builder(identity = "id", generator = crate::ids::next)]
    struct Account {
      id: u64,
    }
  };

  let config = generation_config(&input.attrs, GenerationConfig::default()).expect("config");
  assert_eq!(config.identity, IdentityPolicy::new("id", "crate::ids::next"));
}

#[test]
fn test_struct_level_partial_override_keeps_base() {
  let input: DeriveInput = parse_quote! {
    #[builder(identity = "key")]
    struct Entry {
      key: Uuid,
    }
  };

  let config = generation_config(&input.attrs, GenerationConfig::default()).expect("config");
  assert_eq!(config.identity.field_name, "key");
  assert_eq!(config.identity.generator, IdentityPolicy::default().generator);
}

#[test]
fn test_unknown_struct_attribute_is_an_error() {
  let input: DeriveInput = parse_quote! {
    #[builder(mode = "fast")]
    struct Entry {}
  };

  assert!(generation_config(&input.attrs, GenerationConfig::default()).is_err());
}

#[test]
fn test_visibility_mapping() {
  let public: syn::Visibility = parse_quote!(pub);
  let krate: syn::Visibility = parse_quote!(pub(crate));
  let inherited = syn::Visibility::Inherited;

  assert_eq!(visibility_of(&public), Visibility::Public);
  assert_eq!(visibility_of(&krate), Visibility::Crate);
  assert_eq!(visibility_of(&inherited), Visibility::File);
}

#[test]
fn test_builder_derives_detected_in_order() {
  let input: DeriveInput = parse_quote! {
    #[derive(Debug, Clone, builder_gen_macros::FluentBuilder)]
    #[derive(ThrowingBuilder)]
    struct User {
      name: String,
    }
  };

  let modes = builder_derives(&input.attrs).expect("derives");
  assert_eq!(modes, [GenerationMode::Fluent, GenerationMode::Throwing]);
}

#[test]
fn test_generic_structs_are_rejected() {
  let generic: DeriveInput = parse_quote!(struct Wrapper<T> { inner: T });
  let plain: DeriveInput = parse_quote!(struct Wrapper { inner: u8 });

  assert!(ensure_not_generic(&generic).is_err());
  assert!(ensure_not_generic(&plain).is_ok());
}

#[test]
fn test_source_items_walks_inline_modules() {
  let file: syn::File = parse_quote! {
    use uuid::Uuid;

    struct First { a: u8 }

    fn helper() {}

    mod nested {
      enum Second { A }
      mod deeper {
        union Third { raw: u32 }
      }
    }

    mod external;
  };

  let items = source_items(&file);
  let names = items.iter().map(SourceItem::qualified_name).collect::<Vec<_>>();
  assert_eq!(names, ["First", "nested::Second", "nested::deeper::Third"]);
  assert!(!items[0].is_nested());
  assert_eq!(items[2].module_path, ["nested", "deeper"]);
  assert_eq!(items[2].input.ident, "Third");
}
