use quote::format_ident;

use crate::{
  decl::DefaultValue,
  error::GenerateError,
  generator::{
    ast::{
      BuildContract, BuildGuard, BuilderDef, BuilderMethod, ConstructorArg, GuardField, TypedField, types::type_text,
    },
    config::{GenerationConfig, IdentityPolicy},
    mode::{FluentStrategy, GenerationMode, GenerationStrategy, PlainStrategy, ThrowingStrategy},
  },
};

fn user_fields() -> Vec<TypedField> {
  vec![
    TypedField::new("uuid", "Uuid"),
    TypedField::new("name", "String"),
    TypedField::new("age", "Option<String>"),
  ]
}

fn plan(strategy: &dyn GenerationStrategy, fields: &[TypedField]) -> BuilderDef {
  strategy
    .plan("User", fields, &GenerationConfig::default())
    .expect("plan should succeed")
}

fn build_method(def: &BuilderDef) -> (&BuildGuard, &[ConstructorArg]) {
  def
    .methods
    .iter()
    .find_map(|method| match method {
      BuilderMethod::Build { guard, args } => Some((guard, args.as_slice())),
      _ => None,
    })
    .expect("every builder has a build method")
}

fn guard_field(name: &str) -> GuardField {
  GuardField {
    field: format_ident!("{}", name),
    property: name.to_string(),
  }
}

#[test]
fn test_properties_are_all_optional_in_declaration_order() {
  let def = plan(&PlainStrategy, &user_fields());

  assert_eq!(def.name, "UserBuilder");
  assert_eq!(def.target, "User");
  let properties = def
    .properties
    .iter()
    .map(|property| property.name.to_string())
    .collect::<Vec<_>>();
  assert_eq!(properties, ["uuid", "name", "age"]);

  let types = def
    .properties
    .iter()
    .map(|property| type_text(&property.ty))
    .collect::<Vec<_>>();
  assert_eq!(types, ["::core::option::Option<Uuid>", "::core::option::Option<String>", "Option<String>"]);
}

#[test]
fn test_method_order() {
  let def = plan(&FluentStrategy, &user_fields());
  let kinds = def
    .methods
    .iter()
    .map(|method| match method {
      BuilderMethod::New => "new".to_string(),
      BuilderMethod::FromItem => "from_item".to_string(),
      BuilderMethod::Fill { .. } => "fill".to_string(),
      BuilderMethod::Setter(setter) => format!("set:{}", setter.method),
      BuilderMethod::Build { .. } => "build".to_string(),
    })
    .collect::<Vec<_>>();

  assert_eq!(
    kinds,
    ["new", "from_item", "fill", "set:uuid", "set:name", "set:age", "build"]
  );
}

#[test]
fn test_plain_guard_combines_required_fields_only() {
  let fields = vec![
    TypedField::new("uuid", "Uuid"),
    TypedField::new("name", "String"),
    TypedField::new("email", "String"),
    TypedField::new("age", "Option<u8>"),
  ];
  let def = plan(&PlainStrategy, &fields);
  let (guard, args) = build_method(&def);

  assert_eq!(def.contract, BuildContract::Optional);
  let arg_order = args.iter().map(|arg| arg.field().to_string()).collect::<Vec<_>>();
  assert_eq!(arg_order, ["uuid", "name", "email", "age"]);
  assert_eq!(
    guard,
    &BuildGuard::Combined(vec![guard_field("name"), guard_field("email")])
  );
  assert!(matches!(&args[0], ConstructorArg::Identity { optional: false, .. }));
  assert!(matches!(&args[1], ConstructorArg::Bound(field) if field == "name"));
  assert!(matches!(&args[2], ConstructorArg::Bound(field) if field == "email"));
  assert!(matches!(&args[3], ConstructorArg::PassThrough(field) if field == "age"));
}

#[test]
fn test_throwing_guard_is_sequential_with_error_contract() {
  let def = plan(&ThrowingStrategy, &user_fields());
  let (guard, _) = build_method(&def);

  assert_eq!(def.mode, GenerationMode::Throwing);
  assert_eq!(def.error().map(|error| error.name.to_string()).as_deref(), Some("UserBuilderError"));
  assert_eq!(
    guard,
    &BuildGuard::Sequential {
      error: format_ident!("UserBuilderError"),
      fields: vec![guard_field("name")],
    }
  );
}

#[test]
fn test_no_required_fields_means_no_guard() {
  let fields = vec![TypedField::new("uuid", "Uuid"), TypedField::new("note", "Option<String>")];

  for strategy in [&PlainStrategy as &dyn GenerationStrategy, &ThrowingStrategy, &FluentStrategy] {
    let def = plan(strategy, &fields);
    assert_eq!(build_method(&def).0, &BuildGuard::None, "{} builder", strategy.mode());
  }
}

#[test]
fn test_empty_record() {
  let def = plan(&ThrowingStrategy, &[]);
  let (guard, args) = build_method(&def);

  assert!(def.properties.is_empty());
  assert_eq!(guard, &BuildGuard::None);
  assert!(args.is_empty());
}

#[test]
fn test_fluent_setters_take_unwrapped_value() {
  let def = plan(&FluentStrategy, &user_fields());
  let setters = def
    .setters()
    .map(|setter| {
      (
        setter.method.to_string(),
        type_text(&setter.value_type),
      )
    })
    .collect::<Vec<_>>();

  assert_eq!(
    setters,
    [
      ("uuid".to_string(), "Uuid".to_string()),
      ("name".to_string(), "String".to_string()),
      ("age".to_string(), "String".to_string()),
    ]
  );
}

#[test]
fn test_fluent_setter_renamed_on_collision() {
  let fields = vec![TypedField::new("build", "String"), TypedField::new("new", "bool")];
  let def = plan(&FluentStrategy, &fields);
  let names = def.setters().map(|setter| setter.method.to_string()).collect::<Vec<_>>();

  assert_eq!(names, ["build_value", "new_value"]);
  assert!(def.setters().all(|setter| setter.field != setter.method));
}

#[test]
fn test_renamed_setter_clashing_with_field_setter_is_rejected() {
  let fields = vec![TypedField::new("build", "String"), TypedField::new("build_value", "u32")];
  let result = FluentStrategy.plan("Task", &fields, &GenerationConfig::default());

  assert!(matches!(
    result,
    Err(GenerateError::SetterCollision { field, setter }) if field == "build" && setter == "build_value"
  ));
}

#[test]
fn test_setter_clash_only_matters_in_fluent_mode() {
  let fields = vec![TypedField::new("fill", "String"), TypedField::new("r#fill_value", "u32")];

  assert!(PlainStrategy.plan("Task", &fields, &GenerationConfig::default()).is_ok());
  assert!(ThrowingStrategy.plan("Task", &fields, &GenerationConfig::default()).is_ok());
  assert!(matches!(
    FluentStrategy.plan("Task", &fields, &GenerationConfig::default()),
    Err(GenerateError::SetterCollision { .. })
  ));
}

#[test]
fn test_plain_and_throwing_have_no_setters() {
  assert_eq!(plan(&PlainStrategy, &user_fields()).setters().count(), 0);
  assert_eq!(plan(&ThrowingStrategy, &user_fields()).setters().count(), 0);
}

#[test]
fn test_defaulted_fields_are_not_guarded() {
  let fields = vec![
    TypedField::new("name", "String"),
    TypedField::new("retries", "u32").with_default(DefaultValue::Implicit),
    TypedField::new("label", "String").with_default(DefaultValue::Expr("\"none\".to_string()".to_string())),
  ];
  let def = plan(&ThrowingStrategy, &fields);
  let (guard, args) = build_method(&def);

  assert_eq!(
    guard,
    &BuildGuard::Sequential {
      error: format_ident!("UserBuilderError"),
      fields: vec![guard_field("name")],
    }
  );
  assert!(matches!(
    &args[1],
    ConstructorArg::Defaulted {
      default: None,
      optional: false,
      ..
    }
  ));
  assert!(matches!(
    &args[2],
    ConstructorArg::Defaulted {
      default: Some(_),
      optional: false,
      ..
    }
  ));
}

#[test]
fn test_custom_identity_policy() {
  let config = GenerationConfig::builder()
    .identity(IdentityPolicy::new("id", "crate::ids::next"))
    .build();
  let fields = vec![TypedField::new("uuid", "Uuid"), TypedField::new("id", "u64")];
  let def = PlainStrategy.plan("Account", &fields, &config).expect("plan");
  let (guard, args) = build_method(&def);

  assert_eq!(guard, &BuildGuard::Combined(vec![guard_field("uuid")]));
  assert!(matches!(&args[1], ConstructorArg::Identity { field, .. } if field == "id"));
}

#[test]
fn test_raw_identifier_property_label() {
  let def = plan(&ThrowingStrategy, &[TypedField::new("r#type", "String")]);
  let (guard, _) = build_method(&def);

  let BuildGuard::Sequential { fields, .. } = guard else {
    panic!("expected sequential guard, got {guard:?}");
  };
  assert_eq!(fields[0].field.to_string(), "r#type");
  assert_eq!(fields[0].property, "type");
}

#[test]
fn test_duplicate_fields_rejected() {
  let fields = vec![TypedField::new("name", "String"), TypedField::new("r#name", "String")];
  let result = PlainStrategy.plan("User", &fields, &GenerationConfig::default());

  assert!(matches!(result, Err(GenerateError::DuplicateField { name }) if name == "name"));
}

#[test]
fn test_invalid_inputs_are_reported() {
  let config = GenerationConfig::default();

  assert!(matches!(
    PlainStrategy.plan("User", &[TypedField::new("name", "Vec<")], &config),
    Err(GenerateError::InvalidType { field, .. }) if field == "name"
  ));
  assert!(matches!(
    PlainStrategy.plan("User", &[TypedField::new("fn", "String")], &config),
    Err(GenerateError::InvalidIdentifier { name }) if name == "fn"
  ));
  assert!(matches!(
    PlainStrategy.plan("not a type", &[], &config),
    Err(GenerateError::InvalidIdentifier { .. })
  ));
  assert!(matches!(
    PlainStrategy.plan(
      "User",
      &[TypedField::new("score", "u32").with_default(DefaultValue::Expr("1 +".to_string()))],
      &config
    ),
    Err(GenerateError::InvalidExpression { field, .. }) if field == "score"
  ));

  let bad_generator = GenerationConfig::builder()
    .identity(IdentityPolicy::new("uuid", "not a path"))
    .build();
  assert!(matches!(
    PlainStrategy.plan("User", &[TypedField::new("uuid", "Uuid")], &bad_generator),
    Err(GenerateError::InvalidIdentityGenerator { .. })
  ));
}
